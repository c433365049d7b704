use rand::Rng;

/// Request lines understood by the library gateway, one operation per line.
/// These are sent verbatim as POST bodies and never parsed on this side.
pub const REQUEST_LINES: [&str; 5] = [
    "DEVOLUCION;prestamoId=101",
    "RENOVACION;prestamoId=102;nuevaFecha=2025-10-22",
    "PRESTAMO;usuarioId=U1;libroCodigo=L1;inicio=2025-11-18;fin=2025-11-25",
    "PRESTAMO;usuarioId=U1;libroCodigo=L2;inicio=2025-11-18;fin=2025-11-25",
    "PRESTAMO;usuarioId=U2;libroCodigo=L1;inicio=2025-11-18;fin=2025-11-25",
];

/// Name under which requests are grouped in the load report.
pub const REQUEST_NAME: &str = "OperacionBiblioteca";

pub fn random_request_line() -> &'static str {
    let index = rand::thread_rng().gen_range(0..REQUEST_LINES.len());
    REQUEST_LINES[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn random_line_is_always_from_the_pool() {
        for _ in 0..200 {
            let line = random_request_line();
            assert!(REQUEST_LINES.contains(&line));
            assert!(!line.is_empty());
        }
    }

    #[test]
    fn random_line_is_roughly_uniform() {
        let draws = 5_000;
        let mut counts: HashMap<&str, u32> = HashMap::new();

        for _ in 0..draws {
            *counts.entry(random_request_line()).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), REQUEST_LINES.len());
        // Expected 1000 per line; bounds are wide enough to never flake.
        for (line, count) in counts {
            assert!(
                (700..=1300).contains(&count),
                "{} drawn {} times out of {}",
                line,
                count,
                draws
            );
        }
    }
}
