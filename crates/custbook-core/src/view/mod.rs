// ── Screen view models ──
//
// One owned object per screen. Views hold the state a screen shows, run
// validation before talking to the store, and never outlive their scope:
// requests still in flight when a view is unmounted resolve to
// `CoreError::Cancelled` and leave the view untouched.

mod create;
mod list;
mod profile;
mod scope;
mod update;

pub use create::CreateView;
pub use list::ListView;
pub use profile::{AddressEditor, ProfileView};
pub use scope::{UnmountHandle, ViewScope};
pub use update::UpdateView;
