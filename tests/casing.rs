use caseshift::{classify, set_casing, CasingError, CasingStyle, StrExt};

const VALID_TARGETS: [CasingStyle; 9] = [
    CasingStyle::Upper,
    CasingStyle::Lower,
    CasingStyle::Title,
    CasingStyle::Pascal,
    CasingStyle::Camel,
    CasingStyle::Snake,
    CasingStyle::Inverse,
    CasingStyle::AlternatingNormal,
    CasingStyle::AlternatingReverse,
];

#[test]
fn classifier_never_reports_transform_only_styles() {
    let inputs = [
        "SoMe RaNdOm TeSt",
        "sOmE rAnDoM tEsT",
        "some Random Test",
        "x",
        "X",
        "xY",
        "Xy",
    ];
    for input in inputs {
        assert!(classify(input).is_detectable(), "{:?}", input);
    }
}

#[test]
fn alternating_render_and_detect_count_parity_differently() {
    // Rendering counts the space, detection skips it.
    let rendered = set_casing("some random", CasingStyle::AlternatingNormal).unwrap();
    assert_eq!(rendered, "SoMe rAnDoM");
    assert_eq!(classify(&rendered), CasingStyle::Unrecognized);

    let rendered = set_casing("some", CasingStyle::AlternatingNormal).unwrap();
    assert_eq!(rendered, "SoMe");
    assert_eq!(classify("SoMe rAnDoM tEsT"), CasingStyle::Unrecognized);
    assert_eq!(classify("SoMe RaNdOm"), CasingStyle::Alternating);
}

#[test]
fn conversions_land_in_their_style() {
    let input = "some random test";
    assert_eq!(classify(&set_casing(input, CasingStyle::Upper).unwrap()), CasingStyle::Upper);
    assert_eq!(classify(&set_casing(input, CasingStyle::Title).unwrap()), CasingStyle::Title);
    assert_eq!(classify(&set_casing(input, CasingStyle::Pascal).unwrap()), CasingStyle::Pascal);
    assert_eq!(classify(&set_casing(input, CasingStyle::Camel).unwrap()), CasingStyle::Camel);
    assert_eq!(classify(&set_casing(input, CasingStyle::Snake).unwrap()), CasingStyle::Snake);
    assert_eq!(
        classify(&set_casing("Some Random Test", CasingStyle::Inverse).unwrap()),
        CasingStyle::Inverse
    );
}

#[test]
fn empty_input_is_a_no_op_for_every_target() {
    for target in VALID_TARGETS {
        assert_eq!(set_casing("", target).unwrap(), "");
    }
    assert_eq!(classify(""), CasingStyle::Unrecognized);
}

#[test]
fn invalid_target_errors_even_without_letters() {
    assert_eq!(
        set_casing("123", CasingStyle::Unrecognized),
        Err(CasingError::InvalidTargetStyle(CasingStyle::Unrecognized))
    );
}

#[test]
fn non_ascii_letters() {
    assert_eq!(classify("ÉTÉ CHAUD"), CasingStyle::Upper);
    assert_eq!(classify("großeStraße"), CasingStyle::Camel);
    assert_eq!(
        set_casing("großeStraße", CasingStyle::Title).unwrap(),
        "Große Straße"
    );
    assert_eq!("Été chaud".set_casing(CasingStyle::Snake).unwrap(), "Été_chaud");
}

#[test]
fn concurrent_calls_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                (
                    classify("someRandomTest"),
                    set_casing("someRandomTest", CasingStyle::Title).unwrap(),
                )
            })
        })
        .collect();

    for handle in handles {
        let (style, title) = handle.join().unwrap();
        assert_eq!(style, CasingStyle::Camel);
        assert_eq!(title, "Some Random Test");
    }
}
