use super::*;

#[test]
fn test_diatonic_triads_in_c() {
    let chords = diatonic_chords("C", ChordType::Triad).unwrap();
    assert_eq!(chords.len(), 7);

    // C Dm Em F G Am Bdim
    assert_eq!(chords[0].chord.symbol, "C");
    assert_eq!(chords[0].function, ChordFunction::Tonic);
    assert_eq!(chords[1].chord.symbol, "Dm");
    assert_eq!(chords[1].function, ChordFunction::Subdominant);
    assert_eq!(chords[2].chord.symbol, "Em");
    assert_eq!(chords[3].chord.symbol, "F");
    assert_eq!(chords[4].chord.symbol, "G");
    assert_eq!(chords[4].function, ChordFunction::Dominant);
    assert_eq!(chords[5].chord.symbol, "Am");
    assert_eq!(chords[6].chord.symbol, "Bdim");
    assert_eq!(chords[6].function, ChordFunction::Dominant);

    // Degrees ascend from 1
    for (i, info) in chords.iter().enumerate() {
        assert_eq!(info.degree, (i + 1) as u8);
    }
}

#[test]
fn test_diatonic_sevenths_in_c() {
    let chords = diatonic_chords("C", ChordType::Seventh).unwrap();
    assert_eq!(chords[0].chord.symbol, "CM7");
    assert_eq!(chords[1].chord.symbol, "Dm7");
    assert_eq!(chords[4].chord.symbol, "G7");
    assert_eq!(chords[6].chord.symbol, "Bm7(b5)");

    assert_eq!(chords[0].roman_numeral, "IM7");
    assert_eq!(chords[4].roman_numeral, "V7");
    assert_eq!(chords[6].roman_numeral, "viim7(b5)");
}

#[test]
fn test_diatonic_flat_key_spelling() {
    let chords = diatonic_chords("Eb", ChordType::Triad).unwrap();
    // Eb F G Ab Bb C D -> Eb Fm Gm Ab Bb Cm Ddim
    assert_eq!(chords[0].chord.symbol, "Eb");
    assert_eq!(chords[3].chord.symbol, "Ab");
    assert_eq!(chords[4].chord.symbol, "Bb");
    assert_eq!(chords[6].chord.symbol, "Ddim");
}

#[test]
fn test_diatonic_rejects_invalid_key() {
    assert!(diatonic_chords("X", ChordType::Triad).is_err());
}

#[test]
fn test_interchange_natural_minor_in_c() {
    let groups = interchange_groups("C", ChordType::Triad).unwrap();
    let minor = groups
        .iter()
        .find(|g| g.source == crate::scale::ScaleType::NaturalMinor)
        .unwrap();
    assert_eq!(minor.display_name, "Natural Minor");
    assert_eq!(minor.chords.len(), 7);

    // i ii° bIII iv v bVI bVII
    assert_eq!(minor.chords[0].chord.symbol, "Cm");
    assert_eq!(minor.chords[0].roman_numeral, "i");
    assert!(minor.chords[0].is_available);

    // The mediant is borrowed: Eb differs from the diatonic Em
    assert_eq!(minor.chords[2].chord.symbol, "Eb");
    assert_eq!(minor.chords[2].roman_numeral, "bIII");
    assert!(minor.chords[2].is_available);

    assert_eq!(minor.chords[5].chord.symbol, "Ab");
    assert_eq!(minor.chords[5].roman_numeral, "bVI");
    assert_eq!(minor.chords[6].chord.symbol, "Bb");
    assert_eq!(minor.chords[6].roman_numeral, "bVII");
}

#[test]
fn test_interchange_transposes_with_key() {
    let groups = interchange_groups("G", ChordType::Triad).unwrap();
    let minor = groups
        .iter()
        .find(|g| g.source == crate::scale::ScaleType::NaturalMinor)
        .unwrap();
    // In G the borrowed mediant shifts to Bb
    assert_eq!(minor.chords[2].chord.symbol, "Bb");
    assert!(minor.chords[2].is_available);
}

#[test]
fn test_interchange_marks_shared_degrees_unavailable() {
    let groups = interchange_groups("C", ChordType::Triad).unwrap();
    let mixo = groups
        .iter()
        .find(|g| g.source == crate::scale::ScaleType::Mixolydian)
        .unwrap();
    // Mixolydian shares I with the parallel major: returned but dimmed
    assert_eq!(mixo.chords[0].chord.symbol, "C");
    assert!(!mixo.chords[0].is_available);
    // bVII is the borrowed color
    assert_eq!(mixo.chords[6].chord.symbol, "Bb");
    assert!(mixo.chords[6].is_available);
}

#[test]
fn test_interchange_harmonic_minor_sevenths() {
    let groups = interchange_groups("C", ChordType::Seventh).unwrap();
    let harmonic = groups
        .iter()
        .find(|g| g.source == crate::scale::ScaleType::HarmonicMinor)
        .unwrap();
    // CmM7 Dm7(b5) EbM7(#5) Fm7 G7 AbM7 Bdim7
    assert_eq!(harmonic.chords[0].chord.symbol, "CmM7");
    assert_eq!(harmonic.chords[1].chord.symbol, "Dm7(b5)");
    assert_eq!(harmonic.chords[2].chord.symbol, "EbM7(#5)");
    assert_eq!(harmonic.chords[4].chord.symbol, "G7");
    assert_eq!(harmonic.chords[6].chord.symbol, "Bdim7");
}

#[test]
fn test_interchange_lydian_keeps_sharps() {
    let groups = interchange_groups("C", ChordType::Triad).unwrap();
    let lydian = groups
        .iter()
        .find(|g| g.source == crate::scale::ScaleType::Lydian)
        .unwrap();
    // Lydian's raised 4th harmonizes to a sharp-spelled diminished triad
    assert_eq!(lydian.chords[3].chord.symbol, "F#dim");
    assert_eq!(lydian.chords[3].roman_numeral, "#iv°");
    assert!(lydian.chords[3].is_available);
}

#[test]
fn test_secondary_dominants_in_c() {
    let pairs = secondary_dominants("C").unwrap();
    // Targets: I ii iii IV vi (never the already-dominant degrees 5 and 7)
    let degrees: Vec<u8> = pairs.iter().map(|p| p.target_degree).collect();
    assert_eq!(degrees, vec![1, 2, 3, 4, 6]);

    let v7_of_ii = pairs.iter().find(|p| p.target_degree == 2).unwrap();
    assert_eq!(v7_of_ii.secondary.symbol, "A7");
    assert_eq!(v7_of_ii.secondary_label, "V7/ii");
    assert_eq!(v7_of_ii.tritone_sub.symbol, "Eb7");
    assert_eq!(v7_of_ii.sub_label, "subV7/ii");

    let v7_of_vi = pairs.iter().find(|p| p.target_degree == 6).unwrap();
    assert_eq!(v7_of_vi.secondary.symbol, "E7");
    assert_eq!(v7_of_vi.tritone_sub.symbol, "Bb7");
}

#[test]
fn test_secondary_dominant_and_sub_share_tritone_relation() {
    let pairs = secondary_dominants("A").unwrap();
    for pair in pairs {
        let diff = (pair.secondary.root.pitch_class as i16
            - pair.tritone_sub.root.pitch_class as i16)
            .rem_euclid(12);
        assert_eq!(diff, 6, "sub must sit a tritone from {}", pair.secondary.symbol);
        assert_eq!(pair.secondary.quality, crate::chord::ChordQuality::Dominant7);
        assert_eq!(pair.tritone_sub.quality, crate::chord::ChordQuality::Dominant7);
    }
}

#[test]
fn test_generators_are_idempotent() {
    let a = diatonic_chords("D", ChordType::Seventh).unwrap();
    let b = diatonic_chords("D", ChordType::Seventh).unwrap();
    assert_eq!(a, b);

    let a = interchange_groups("D", ChordType::Seventh).unwrap();
    let b = interchange_groups("D", ChordType::Seventh).unwrap();
    assert_eq!(a, b);

    let a = secondary_dominants("D").unwrap();
    let b = secondary_dominants("D").unwrap();
    assert_eq!(a, b);
}
