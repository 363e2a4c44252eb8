//! 界面侧的纯本地逻辑：注册校验、在线名册分组、列表搜索。

pub mod roster;
pub mod search;
pub mod validation;

pub use roster::{Faction, Roster};
pub use validation::{RegistrationForm, ValidationError};
