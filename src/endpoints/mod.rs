pub mod faceit;
pub mod steam;
