use super::*;

#[test]
fn parse_robots_accepts_multiple_entries() {
    let robots = parse_robots("R1:10.0.0.1:9000:0.5,1.0;R2:10.0.0.2:9001:0.5").unwrap();
    assert_eq!(robots.len(), 2);
    let r1 = &robots["R1"];
    assert_eq!(r1.host, "10.0.0.1");
    assert_eq!(r1.port, 9000);
    assert_eq!(r1.cell_heights, vec![0.5, 1.0]);
}

#[test]
fn parse_robots_accepts_optional_trailing_tag() {
    let robots = parse_robots("R1:10.0.0.1:9000:0.5:T1").unwrap();
    assert_eq!(robots["R1"].initial_tag.as_deref(), Some("T1"));
}

#[test]
fn parse_robots_empty_string_is_empty_map() {
    assert!(parse_robots("").unwrap().is_empty());
}

#[test]
fn parse_robots_rejects_malformed_entry() {
    let err = parse_robots("R1:10.0.0.1").unwrap_err();
    assert!(matches!(err, ConfigError::MalformedRobot(_)));
}

#[test]
fn parse_robots_rejects_bad_port() {
    let err = parse_robots("R1:10.0.0.1:notaport:0.5").unwrap_err();
    assert!(matches!(err, ConfigError::MalformedRobot(_)));
}
