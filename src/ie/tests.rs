use crate::State::*;
use crate::{State, ValidationError, detect_states, parse_ie, validate_ie};

#[test]
fn acceptance_vectors_resolve_to_every_matching_state() {
    // (input, every state whose algorithm accepts it, in code order).
    // Several states publish the identical weight/remap pair, so many
    // inputs legitimately resolve to more than one state.
    let cases: Vec<(&str, Vec<State>)> = vec![
        ("0100482300112", vec![Ac]),
        ("240000048", vec![Al]),
        ("042933684", vec![Am, Es, Pb, Pi, Sc, Se]),
        ("030123459", vec![Ap]),
        ("12345663", vec![Ba]),
        ("100000306", vec![Ba]),
        ("61234557", vec![Ba]),
        ("060000015", vec![Am, Ce, Es, Pb, Pi, Sc, Se]),
        ("0730000100109", vec![Df]),
        ("082203237", vec![Am, Es, Pb, Pi, Sc, Se]),
        ("109876547", vec![Am, Es, Go, Pb, Pi, Sc, Se]),
        ("101031051", vec![Go]),
        ("110000030", vec![Am, Go, Sc, Se]),
        ("120000385", vec![Ma]),
        ("0623079040081", vec![Mg]),
        ("280000006", vec![Ms]),
        ("00130000019", vec![Mt]),
        ("159999995", vec![Pa]),
        ("750000007", vec![Pa]),
        ("160000017", vec![Am, Es, Pb, Pi, Sc, Se]),
        ("061123404", vec![Am, Ce, Es, Pb, Pe, Pi, Ro, Sc, Se]),
        ("18100100000049", vec![Pe]),
        ("193016567", vec![Am, Es, Pb, Pi, Sc, Se]),
        ("1234567850", vec![Pr]),
        ("12345674", vec![Rj]),
        ("20000040", vec![Rj]),
        ("200400401", vec![Rn]),
        ("2000400400", vec![Pr, Rn]),
        ("101625213", vec![Ro]),
        ("00000000625213", vec![Pe, Ro]),
        ("240082668", vec![Rr]),
        ("2243658792", vec![Rs]),
        ("251040852", vec![Am, Es, Pb, Pi, Sc, Se]),
        ("271234563", vec![Am, Es, Pb, Pe, Pi, Sc, Se]),
        ("110042490114", vec![Sp]),
        ("29010227836", vec![To]),
    ];
    for (input, expected) in cases {
        assert_eq!(detect_states(input).unwrap(), expected, "wrong match set for {input}");
    }
}

#[test]
fn formatted_output_follows_each_states_mask() {
    let cases: Vec<(&str, State, &str)> = vec![
        ("0100482300112", Ac, "01.004.823/001-12"),
        ("240000048", Al, "24.000.004-8"),
        ("030123459", Ap, "03.012.345-9"),
        ("12345663", Ba, "123456-63"),
        ("100000306", Ba, "1000003-06"),
        ("060000015", Ce, "06000001-5"),
        ("0730000100109", Df, "07.300.001/001-09"),
        ("101031051", Go, "10.103.105-1"),
        ("120000385", Ma, "12.000.038-5"),
        ("0623079040081", Mg, "062.307.904/0081"),
        ("280000006", Ms, "28.000.000-6"),
        ("00130000019", Mt, "0013000001-9"),
        ("159999995", Pa, "15-999999-5"),
        ("061123404", Pe, "0611234-04"),
        ("18100100000049", Pe, "18.1.001.0000004-9"),
        ("1234567850", Pr, "123.45678-50"),
        ("12345674", Rj, "12.345.67-4"),
        ("200400401", Rn, "20.040.040-1"),
        ("2000400400", Rn, "20.0.040.040-0"),
        ("101625213", Ro, "101.62521-3"),
        ("00000000625213", Ro, "0000000062521-3"),
        ("240082668", Rr, "24008266-8"),
        ("2243658792", Rs, "224/3658792"),
        ("251040852", Sc, "251.040.852"),
        ("271234563", Se, "27123456-3"),
        ("110042490114", Sp, "110.042.490.114"),
        ("29010227836", To, "29.01.022783-6"),
    ];
    for (input, state, formatted) in cases {
        let records = parse_ie(input).unwrap();
        let record = records
            .iter()
            .find(|r| r.state == state)
            .unwrap_or_else(|| panic!("{input} did not resolve to {state}"));
        assert_eq!(record.formatted, formatted, "wrong formatting for {input} as {state}");
    }
}

#[test]
fn ambiguous_input_returns_every_matching_state() {
    // 82 collides with no dedicated prefix route, and Amazonas, Santa
    // Catarina and Sergipe share the generic 9..2 weights with a degenerate
    // remainder mapping to 0.
    let records = parse_ie("820000000").unwrap();
    let states: Vec<State> = records.iter().map(|r| r.state).collect();
    assert_eq!(states, vec![Am, Sc, Se]);
    for record in &records {
        assert_eq!(record.raw, "820000000");
    }
}

#[test]
fn unambiguous_sao_paulo_number() {
    let records = parse_ie("110042490114").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].state, Sp);
    assert_eq!(records[0].raw, "110042490114");
    assert_eq!(records[0].formatted, "110.042.490.114");
    // Punctuated input normalizes to the same record.
    assert_eq!(parse_ie("110.042.490.114").unwrap(), records);
}

#[test]
fn rural_producer_resolves_to_sao_paulo() {
    let records = parse_ie("P-01100424.3/002").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].state, Sp);
    assert_eq!(records[0].raw, "P011004243002");
    assert_eq!(records[0].formatted, "P-01100424.3/002");
    // Same registration with a corrupted check digit.
    assert_eq!(parse_ie("P011004253002"), Err(ValidationError::InvalidChecksum));
}

#[test]
fn zero_matches_collapse_to_invalid_checksum() {
    // No candidate passes, including the prefix-gated ones.
    assert_eq!(validate_ie("820000003"), Err(ValidationError::InvalidChecksum));
    assert_eq!(validate_ie("110042490113"), Err(ValidationError::InvalidChecksum));
    // Routed to a single state by prefix, then rejected by its check digit.
    assert_eq!(validate_ie("280000007"), Err(ValidationError::InvalidChecksum));
}

#[test]
fn candidate_routing_respects_dedicated_prefixes() {
    // 24-prefixed nine-digit inputs are only ever Roraima or Alagoas; the
    // Mod9 vector must not leak into the generic set and vice versa.
    assert_eq!(detect_states("240082668").unwrap(), vec![Rr]);
    assert_eq!(detect_states("240000048").unwrap(), vec![Al]);
    // An Alagoas registrant class outside the published set fails even with
    // a consistent check digit (class digit 1 is not published).
    assert_eq!(validate_ie("241000041"), Err(ValidationError::InvalidChecksum));
}

#[test]
fn normalizer_errors_surface_unchanged() {
    assert_eq!(validate_ie(""), Err(ValidationError::InvalidFormat));
    assert_eq!(validate_ie("25104085x"), Err(ValidationError::InvalidFormat));
    assert_eq!(validate_ie("1234567"), Err(ValidationError::InvalidLength));
    assert_eq!(validate_ie(&"9".repeat(15)), Err(ValidationError::InvalidLength));
}

#[test]
fn validate_is_parse_without_records() {
    assert!(validate_ie("251.040.852").is_ok());
    assert!(validate_ie("P-01100424.3/002").is_ok());
}
