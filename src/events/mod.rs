pub mod fullscreen;
pub mod keyboard;

use crate::storage::LocalStorage;
use std::cell::RefCell;
use std::rc::Rc;
use vergence_core::ControlEngine;

pub type SharedEngine = Rc<RefCell<ControlEngine<LocalStorage>>>;
