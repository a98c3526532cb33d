mod home;
pub use home::Home;

mod browse_tips;
pub use browse_tips::BrowseTips;

mod explore_gardeners;
pub use explore_gardeners::ExploreGardeners;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod google_callback;
pub use google_callback::GoogleCallback;

mod tip_form;

mod share_tip;
pub use share_tip::ShareTip;

mod update_tip;
pub use update_tip::UpdateTip;

mod my_tips;
pub use my_tips::MyTips;

mod tip_details;
pub use tip_details::TipDetails;

mod not_found;
pub use not_found::NotFound;
