use crate::requests::REQUEST_NAME;
use rand::Rng;

/// Local ports where the replicated gateways listen.
pub const REPLICA_PORTS: [u16; 3] = [8081, 8082, 8083];

pub fn random_replica_port() -> u16 {
    let index = rand::thread_rng().gen_range(0..REPLICA_PORTS.len());
    REPLICA_PORTS[index]
}

pub fn replica_url(port: u16) -> String {
    format!("http://localhost:{}/send", port)
}

pub fn replica_label(port: u16) -> String {
    format!("{}_P{}", REQUEST_NAME, port)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn random_port_is_always_a_replica_port() {
        for _ in 0..200 {
            assert!(REPLICA_PORTS.contains(&random_replica_port()));
        }
    }

    #[test]
    fn random_port_is_roughly_uniform() {
        let draws = 3_000;
        let mut counts: HashMap<u16, u32> = HashMap::new();

        for _ in 0..draws {
            *counts.entry(random_replica_port()).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), REPLICA_PORTS.len());
        for (port, count) in counts {
            assert!(
                (800..=1200).contains(&count),
                "port {} drawn {} times out of {}",
                port,
                count,
                draws
            );
        }
    }

    #[test]
    fn replica_url_points_at_send_endpoint() {
        assert_eq!(replica_url(8081), "http://localhost:8081/send");
        assert_eq!(replica_url(8083), "http://localhost:8083/send");
    }

    #[test]
    fn replica_label_encodes_the_port() {
        assert_eq!(replica_label(8081), "OperacionBiblioteca_P8081");
        assert_eq!(replica_label(8082), "OperacionBiblioteca_P8082");
        assert_eq!(replica_label(8083), "OperacionBiblioteca_P8083");
    }
}
