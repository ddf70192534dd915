mod all;
mod contact;
mod footer;
mod log;
mod navbar;
mod overlays;
mod page;

use self::log::log;
use super::*;
use footer::footer;
use navbar::navbar;
use page::page;

pub use all::all as render;
