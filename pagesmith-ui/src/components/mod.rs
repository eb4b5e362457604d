mod chat;
mod design;
mod header;
mod hero;
mod playground;
mod settings;
mod sidebar;
mod tools;
mod workspace;

pub use chat::ChatSection;
pub use design::{WebsiteDesign, PREVIEW_FRAME_ID};
pub use header::{Logo, NavLink, PlaygroundHeader, SiteHeader, ThemeToggle};
pub use hero::Hero;
pub use playground::Playground;
pub use settings::{ElementSettings, ImageSettings};
pub use sidebar::AppSidebar;
pub use tools::{page_source, ScreenSize, WebPageTools};
pub use workspace::{NotFound, Workspace};
