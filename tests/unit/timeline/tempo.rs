use super::*;

fn tempo(start: u64, end: u64, rate: i64) -> Tempo {
    Tempo::new(TimeInterval::new(Tick(start), Tick(end)).unwrap(), rate).unwrap()
}

fn table_of(tempos: impl IntoIterator<Item = Tempo>) -> TweenlineResult<TempoTable> {
    tempos
        .into_iter()
        .try_fold(TempoTable::new(), |table, t| table.insert(t))
}

fn starts(table: &TempoTable) -> Vec<u64> {
    table.iter().map(|t| t.interval().start().0).collect()
}

#[test]
fn rate_must_be_positive() {
    let iv = TimeInterval::new(Tick(0), Tick(5)).unwrap();
    assert!(matches!(Tempo::new(iv, 0), Err(TweenlineError::InvalidTempo(0))));
    assert!(matches!(Tempo::new(iv, -3), Err(TweenlineError::InvalidTempo(-3))));
    assert!(matches!(
        Tempo::new(iv, i64::from(u32::MAX) + 1),
        Err(TweenlineError::InvalidTempo(_))
    ));
    assert_eq!(Tempo::new(iv, 24).unwrap().rate(), 24);
}

#[test]
fn overlapping_tempo_is_rejected() {
    let table = table_of([tempo(1, 3, 5)]).unwrap();
    let err = table.insert(tempo(2, 5, 10)).unwrap_err();
    assert!(matches!(
        err,
        TweenlineError::Overlap {
            start: Tick(2),
            end: Tick(5),
            existing_start: Tick(1),
            existing_end: Tick(3),
        }
    ));
    assert_eq!(table.len(), 1);
}

#[test]
fn shared_boundary_depends_on_insertion_order() {
    let forward = table_of([tempo(3, 5, 2), tempo(5, 10, 4)]).unwrap();
    assert_eq!(starts(&forward), vec![3, 5]);

    let backward = table_of([tempo(5, 10, 4), tempo(3, 5, 2)]);
    assert!(matches!(backward, Err(TweenlineError::Overlap { .. })));
}

#[test]
fn tempo_swallowing_another_is_rejected() {
    let table = table_of([tempo(4, 6, 2)]).unwrap();
    assert!(matches!(
        table.insert(tempo(1, 10, 3)),
        Err(TweenlineError::Overlap {
            existing_start: Tick(4),
            ..
        })
    ));
}

#[test]
fn earlier_tempo_is_placed_first() {
    let table = table_of([tempo(10, 20, 2), tempo(1, 3, 8), tempo(4, 9, 6)]).unwrap();
    assert_eq!(starts(&table), vec![1, 4, 10]);
}

#[test]
fn rate_at_uses_half_open_ranges() {
    let table = table_of([tempo(1, 3, 5), tempo(5, 8, 7), tempo(9, 9, 3)]).unwrap();
    assert_eq!(table.rate_at(Tick(0)), None);
    assert_eq!(table.rate_at(Tick(1)), Some(5));
    assert_eq!(table.rate_at(Tick(2)), Some(5));
    assert_eq!(table.rate_at(Tick(3)), None);
    assert_eq!(table.rate_at(Tick(5)), Some(7));
    assert_eq!(table.rate_at(Tick(8)), None);
    assert_eq!(table.rate_at(Tick(9)), Some(3));
    assert_eq!(table.rate_at(Tick(100)), None);
}

#[test]
fn empty_table_has_no_rate() {
    assert_eq!(TempoTable::new().rate_at(Tick(0)), None);
    assert!(TempoTable::new().is_empty());
}
