pub const DEFAULT_PORT: u16 = 3000;

// Read once at startup; the port never changes for the process lifetime.
pub fn resolve_port() -> u16 {

    parse_port(std::env::var("PORT").ok())

}

// split out from the env read so tests don't have to mutate process env
fn parse_port(raw: Option<String>) -> u16 {

    raw.and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|port| *port > 0)
        .unwrap_or(DEFAULT_PORT)

}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_missing_port_uses_default() {

        assert_eq!(parse_port(None), 3000);

    }

    #[test]
    fn test_valid_port_overrides_default() {

        assert_eq!(parse_port(Some("8080".to_string())), 8080);

    }

    #[test]
    fn test_unparseable_port_falls_back() {

        assert_eq!(parse_port(Some("not-a-port".to_string())), DEFAULT_PORT);
        assert_eq!(parse_port(Some("".to_string())), DEFAULT_PORT);
        assert_eq!(parse_port(Some("70000".to_string())), DEFAULT_PORT);

    }

    #[test]
    fn test_zero_port_falls_back() {

        assert_eq!(parse_port(Some("0".to_string())), DEFAULT_PORT);

    }
}
