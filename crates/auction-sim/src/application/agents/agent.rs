//! Agent Trait
//!
//! Identity shared by every participant on the roster.

use crate::domain::AgentId;

/// Common surface of sellers and buyers
///
/// Role-specific behavior (stepping, message handling) lives on the concrete
/// types because each role is handed different capabilities by the coordinator.
pub trait Agent {
    /// Get agent's unique identifier
    fn id(&self) -> AgentId;

    /// Display name
    fn name(&self) -> &str;

    /// Rounds this agent has stepped through
    fn round(&self) -> u32;

    /// Get agent type name (for logging)
    fn agent_type(&self) -> &'static str;
}
