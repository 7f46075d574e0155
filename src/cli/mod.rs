use clap::{Subcommand, ValueEnum};

/// Which microservice a process exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServiceKind {
    Doctors,
    Patients,
    Orders,
    /// Every service on one listener.
    All,
}

impl ServiceKind {
    pub fn name(&self) -> &'static str {
        match self {
            ServiceKind::Doctors => "doctores",
            ServiceKind::Patients => "pacientes",
            ServiceKind::Orders => "pedidos",
            ServiceKind::All => "todos",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            ServiceKind::Patients => 8001,
            ServiceKind::Doctors => 8002,
            ServiceKind::Orders => 8003,
            ServiceKind::All => 8000,
        }
    }

    /// The concrete services behind this selection. Never contains `All`.
    pub fn expand(&self) -> Vec<ServiceKind> {
        match self {
            ServiceKind::All => vec![
                ServiceKind::Doctors,
                ServiceKind::Patients,
                ServiceKind::Orders,
            ],
            kind => vec![*kind],
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server for one service or all of them
    Serve {
        #[arg(short, long, value_enum, default_value = "all")]
        service: ServiceKind,

        #[arg(long, env = "CLINICA_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Defaults to the service's conventional port
        /// (patients 8001, doctors 8002, orders 8003, all 8000)
        #[arg(short, long, env = "CLINICA_PORT")]
        port: Option<u16>,
    },

    /// Print the doctor specialties accepted by the API
    Specialties,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_all() {
        assert_eq!(
            ServiceKind::All.expand(),
            vec![
                ServiceKind::Doctors,
                ServiceKind::Patients,
                ServiceKind::Orders
            ]
        );
        assert_eq!(ServiceKind::Orders.expand(), vec![ServiceKind::Orders]);
    }

    #[test]
    fn test_default_ports_are_distinct() {
        let ports: Vec<u16> = [
            ServiceKind::Doctors,
            ServiceKind::Patients,
            ServiceKind::Orders,
            ServiceKind::All,
        ]
        .iter()
        .map(ServiceKind::default_port)
        .collect();

        for (i, a) in ports.iter().enumerate() {
            for b in &ports[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
