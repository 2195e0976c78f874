//! Resource scoping and policy document construction.

use serde::Serialize;

/// Policy language version expected by the gateway.
pub const POLICY_VERSION: &str = "2012-10-17";

/// The one action an authorizer policy grants.
pub const INVOKE_ACTION: &str = "execute-api:Invoke";

/// How far the allow statement reaches.
///
/// `Wide` is the general-purpose choice: when the gateway caches
/// authorization results, one cached decision must cover every call the
/// caller makes during the cache lifetime, so the statement has to span the
/// whole API. `Narrow` authorizes only the invoked method and is retained
/// for the legacy token-based invocation shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScopePolicy {
    /// Every method under the API's base path.
    #[default]
    Wide,
    /// The single invoked method.
    Narrow,
}

impl ScopePolicy {
    /// Derive the policy resource from the invoked method ARN.
    ///
    /// Wide scope keeps the first two `/`-delimited segments (API id and
    /// stage) and appends `/*`; narrow scope returns the ARN unchanged.
    pub fn resource(&self, method_arn: &str) -> String {
        match self {
            ScopePolicy::Narrow => method_arn.to_string(),
            ScopePolicy::Wide => {
                let base: Vec<&str> = method_arn.split('/').take(2).collect();
                format!("{}/*", base.join("/"))
            }
        }
    }
}

/// A single policy statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    /// Granted action.
    pub action: String,
    /// Statement effect.
    pub effect: Effect,
    /// Resource the statement applies to.
    pub resource: String,
}

/// Statement effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Effect {
    Allow,
    Deny,
}

/// Policy document returned with an allow decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    /// Policy language version.
    pub version: String,
    /// Policy statements.
    pub statement: Vec<Statement>,
}

impl PolicyDocument {
    /// Single-statement document allowing `execute-api:Invoke` on `resource`.
    pub fn allow_invoke(resource: impl Into<String>) -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statement: vec![Statement {
                action: INVOKE_ACTION.to_string(),
                effect: Effect::Allow,
                resource: resource.into(),
            }],
        }
    }
}
