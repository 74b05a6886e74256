use crate::{generic::luby::LubyRepresentation, types::err::ConfigError};

/// When to restart a solve, measured in conflicts since the last restart.
///
/// Written as `off`, `geometric:BASE:FACTOR` or `luby:UNIT`.
///
/// ```rust
/// # use marten_sat::config::RestartPolicy;
/// let policy: RestartPolicy = "geometric:100:1.5".parse().unwrap();
/// assert_eq!(policy, RestartPolicy::Geometric { base: 100, factor: 1.5 });
/// assert_eq!(policy.to_string(), "geometric:100:1.5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum RestartPolicy {
    /// Never restart.
    Off,

    /// Restart after `base` conflicts, growing the interval by `factor` after each restart.
    Geometric { base: u32, factor: f64 },

    /// Restart after `unit` times successive elements of the Luby sequence.
    Luby { unit: LubyRepresentation },
}

impl RestartPolicy {
    pub const MIN: RestartPolicy = RestartPolicy::Off;
    pub const MAX: RestartPolicy = RestartPolicy::Luby {
        unit: LubyRepresentation::MAX,
    };
}

impl std::fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::Geometric { base, factor } => write!(f, "geometric:{base}:{factor}"),
            Self::Luby { unit } => write!(f, "luby:{unit}"),
        }
    }
}

impl std::str::FromStr for RestartPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = ConfigError::Value("restart_policy");
        let mut parts = s.split(':');
        let policy = match parts.next().map(|part| part.to_lowercase()).as_deref() {
            Some("off") => Self::Off,

            Some("luby") => {
                let unit = match parts.next() {
                    Some(unit) => unit.parse().map_err(|_| error)?,
                    None => 128,
                };
                Self::Luby { unit }
            }

            Some("geometric") => {
                let base = match parts.next() {
                    Some(base) => base.parse().map_err(|_| error)?,
                    None => 100,
                };
                let factor = match parts.next() {
                    Some(factor) => factor.parse().map_err(|_| error)?,
                    None => 1.5,
                };
                if factor < 1.0 {
                    return Err(error);
                }
                Self::Geometric { base, factor }
            }

            _ => return Err(error),
        };

        match parts.next() {
            None => Ok(policy),
            Some(_) => Err(error),
        }
    }
}
