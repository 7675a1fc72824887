//! Authentication and session management

mod flow;
mod policy;
mod session;
mod token;

pub use flow::LoginFlow;
pub use flow::LoginOutcome;
pub use policy::Organization;
pub use policy::Policy;
pub use policy::PolicyGrant;
pub use policy::UserPolicy;
pub use session::AdminUser;
pub use session::Session;
pub use session::SessionCheck;
pub use token::AccessToken;
pub use token::SessionTokenProvider;
pub use token::StaticTokenProvider;
pub use token::TokenProvider;
