use thiserror::Error;

/// Web services exposed on a Dataproc cluster's master node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Notebook,
    SparkUi,
    SparkUi1,
    SparkUi2,
    SparkHistory,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(
        "unknown service `{token}`. Accepted: notebook|nb|spark-ui|ui|spark-ui1|ui1|spark-ui2|ui2|spark-history|hist"
    )]
    UnknownToken { token: String },
}

/// Accepts both canonical service names and their shorthand aliases.
pub fn parse(token: &str) -> Result<Service, ServiceError> {
    match token {
        "notebook" | "nb" => Ok(Service::Notebook),
        "spark-ui" | "ui" => Ok(Service::SparkUi),
        "spark-ui1" | "ui1" => Ok(Service::SparkUi1),
        "spark-ui2" | "ui2" => Ok(Service::SparkUi2),
        "spark-history" | "hist" => Ok(Service::SparkHistory),
        other => Err(ServiceError::UnknownToken {
            token: other.to_string(),
        }),
    }
}

impl Service {
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Service::Notebook => "notebook",
            Service::SparkUi => "spark-ui",
            Service::SparkUi1 => "spark-ui1",
            Service::SparkUi2 => "spark-ui2",
            Service::SparkHistory => "spark-history",
        }
    }

    /// Fixed port the service listens on at the master node.
    pub fn remote_port(&self) -> u16 {
        match self {
            Service::Notebook => 8123,
            Service::SparkUi => 4040,
            Service::SparkUi1 => 4041,
            Service::SparkUi2 => 4042,
            Service::SparkHistory => 18080,
        }
    }
}
