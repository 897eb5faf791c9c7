use std::convert::TryFrom;
use tokio::time::Duration;

const DEFAULT_GOSSIP_PERIOD: Duration = Duration::from_secs(60);
const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_MAX_RERESOLUTIONS: usize = 3;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum OptionsError {
    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
}

/// Tuning knobs of a class server. Unset fields take defaults.
#[derive(Clone, Debug, Default)]
pub struct ClassServerOptions {
    /// How often periodic gossip pushes state, once enabled. Defaults to 60s.
    pub gossip_period: Option<Duration>,
    /// Limit on each call to the naming server or a peer. Defaults to 5s.
    pub rpc_timeout: Option<Duration>,
}

#[derive(Debug)]
pub(crate) struct ClassServerOptionsValidated {
    pub(crate) gossip_period: Duration,
    pub(crate) rpc_timeout: Duration,
}

impl TryFrom<ClassServerOptions> for ClassServerOptionsValidated {
    type Error = OptionsError;

    fn try_from(options: ClassServerOptions) -> Result<Self, Self::Error> {
        let values = ClassServerOptionsValidated {
            gossip_period: options.gossip_period.unwrap_or(DEFAULT_GOSSIP_PERIOD),
            rpc_timeout: options.rpc_timeout.unwrap_or(DEFAULT_RPC_TIMEOUT),
        };

        non_zero("gossip_period", values.gossip_period)?;
        non_zero("rpc_timeout", values.rpc_timeout)?;

        Ok(values)
    }
}

/// Tuning knobs of the student, professor and admin frontends.
#[derive(Clone, Debug, Default)]
pub struct FrontendOptions {
    pub rpc_timeout: Option<Duration>,
    /// How many times one operation may re-resolve replicas after finding them unreachable
    /// before giving up. Defaults to 3.
    pub max_reresolutions: Option<usize>,
}

#[derive(Clone, Debug)]
pub(crate) struct FrontendOptionsValidated {
    pub(crate) rpc_timeout: Duration,
    pub(crate) max_reresolutions: usize,
}

impl TryFrom<FrontendOptions> for FrontendOptionsValidated {
    type Error = OptionsError;

    fn try_from(options: FrontendOptions) -> Result<Self, Self::Error> {
        let values = FrontendOptionsValidated {
            rpc_timeout: options.rpc_timeout.unwrap_or(DEFAULT_RPC_TIMEOUT),
            max_reresolutions: options.max_reresolutions.unwrap_or(DEFAULT_MAX_RERESOLUTIONS),
        };

        non_zero("rpc_timeout", values.rpc_timeout)?;

        Ok(values)
    }
}

fn non_zero(name: &'static str, duration: Duration) -> Result<(), OptionsError> {
    if duration == Duration::from_secs(0) {
        return Err(OptionsError::ZeroDuration(name));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let server = ClassServerOptionsValidated::try_from(ClassServerOptions::default()).unwrap();
        assert_eq!(server.gossip_period, Duration::from_secs(60));
        assert_eq!(server.rpc_timeout, Duration::from_secs(5));

        let frontend = FrontendOptionsValidated::try_from(FrontendOptions::default()).unwrap();
        assert_eq!(frontend.rpc_timeout, Duration::from_secs(5));
        assert_eq!(frontend.max_reresolutions, 3);
    }

    #[test]
    fn zero_durations_are_rejected() {
        let result = ClassServerOptionsValidated::try_from(ClassServerOptions {
            gossip_period: Some(Duration::from_secs(0)),
            ..ClassServerOptions::default()
        });
        assert_eq!(result.unwrap_err(), OptionsError::ZeroDuration("gossip_period"));

        let result = FrontendOptionsValidated::try_from(FrontendOptions {
            rpc_timeout: Some(Duration::from_secs(0)),
            max_reresolutions: Some(0),
        });
        assert_eq!(result.unwrap_err(), OptionsError::ZeroDuration("rpc_timeout"));
    }
}
