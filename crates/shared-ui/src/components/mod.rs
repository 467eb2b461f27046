// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod input;
pub mod search_bar;
pub mod stat_tile;

// Primitive wrappers
pub mod progress;
pub mod separator;
pub mod toast;

// Depends on button
pub mod sidebar;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use form_select::*;
pub use input::*;
pub use progress::*;
pub use search_bar::*;
pub use separator::*;
pub use sidebar::*;
pub use stat_tile::*;
pub use toast::*;
