mod audit;

pub use audit::AuditCommands;
