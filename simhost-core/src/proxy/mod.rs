mod handlers;
mod site_gateway;

pub use site_gateway::SiteGateway;
