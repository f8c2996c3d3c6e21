use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TweenlineError::invalid_range("x")
            .to_string()
            .contains("invalid range:")
    );
    assert!(
        TweenlineError::invalid_state("x")
            .to_string()
            .contains("invalid state:")
    );
    assert!(
        TweenlineError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        TweenlineError::UnknownShape("R".into())
            .to_string()
            .contains("unknown shape: 'R'")
    );
    assert!(
        TweenlineError::InvalidTempo(0)
            .to_string()
            .contains("invalid tempo:")
    );
}

#[test]
fn structured_variants_name_their_ticks() {
    let err = TweenlineError::MergeConflict {
        attribute: Attribute::X,
        start: Tick(2),
        end: Tick(5),
    };
    assert_eq!(
        err.to_string(),
        "merge conflict: two motions change x during ticks [2, 5]"
    );

    let err = TweenlineError::Continuity {
        shape: "R".into(),
        prev_end: Tick(4),
        next_start: Tick(4),
    };
    let msg = err.to_string();
    assert!(msg.starts_with("continuity error:"));
    assert!(msg.contains("'R'"));
    assert!(msg.contains("tick 4"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TweenlineError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn oversized_tempo_rate_names_the_valid_range() {
    let msg = TweenlineError::InvalidTempo(5_000_000_000).to_string();
    assert_eq!(
        msg,
        "invalid tempo: rate must be in [1, 4294967295], got 5000000000"
    );
    assert!(!msg.contains("> 0"));
}
