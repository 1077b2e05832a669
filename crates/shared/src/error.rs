#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Server(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Server(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Server(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refuse(count: usize) -> Result<()> {
        if count == 0 {
            crate::bail!("nothing to cook");
        }

        crate::bail!("too many steps: {}", count)
    }

    #[test]
    fn bail_builds_server_error() {
        match refuse(0) {
            Err(Error::Server(msg)) => assert_eq!(msg, "nothing to cook"),
            other => panic!("unexpected result: {other:?}"),
        }

        match refuse(3) {
            Err(Error::Server(msg)) => assert_eq!(msg, "too many steps: 3"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
