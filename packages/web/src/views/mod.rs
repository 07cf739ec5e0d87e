mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboards;
pub use dashboards::{ChefDashboard, ConsumerDashboard, CourierDashboard};
