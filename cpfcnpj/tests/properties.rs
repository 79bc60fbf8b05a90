use cpfcnpj::{Kind, Shape, cnpj, cpf};
use rstest::rstest;

const CPFS: &[&str] = &["11144477735", "52998224725", "00000000000"];
const CNPJS: &[&str] = &["11222333000181", "11444777000161", "00000000000000"];

#[test]
fn test_scenarios() {
    assert!(cpf::is_valid("11144477735"));
    assert!(cpf::is_valid("111.444.777-35"));
    assert!(!cpf::is_valid("111444777735"));
    assert_eq!(cpf::format("11144477735"), "111.444.777-35");
    assert_eq!(cpf::filter("111.444.777-35"), "11144477735");
    assert!(cnpj::is_valid("11222333000181"));
    assert_eq!(cnpj::format("11222333000181"), "11.222.333/0001-81");
    assert!(cpfcnpj::is_valid("111.444.777-35"));
    assert!(cpfcnpj::is_valid("11222333000181"));
}

#[test]
fn test_round_trip_and_idempotence() {
    for raw in CPFS.iter().chain(CNPJS) {
        let formatted = cpfcnpj::format(raw);
        assert_ne!(formatted, *raw);
        assert_eq!(cpfcnpj::filter(&formatted), *raw);
        assert_eq!(cpfcnpj::format(&formatted), formatted);
        assert_eq!(cpfcnpj::filter(raw), *raw);
        assert!(cpfcnpj::is_valid(raw));
        assert!(cpfcnpj::is_valid(&formatted));
    }
}

#[test]
fn test_wrong_check_digit_is_rejected() {
    for raw in CPFS.iter().chain(CNPJS) {
        let (body, check) = raw.split_at(raw.len() - 2);
        for wrong in (0..=9).map(|d| format!("{}{d}", &check[..1])) {
            if wrong == check {
                continue;
            }
            let altered = format!("{body}{wrong}");
            assert!(
                !cpfcnpj::is_valid(&altered),
                "{altered} should not validate"
            );
            assert!(!cpfcnpj::is_valid(&cpfcnpj::format(&altered)));
        }
    }
}

#[rstest]
#[case::empty(0)]
#[case::short(10)]
#[case::between_cpf_and_14(12)]
#[case::between_14_and_18(15)]
#[case::just_under_cnpj(17)]
#[case::long(19)]
#[case::very_long(64)]
fn test_unrecognized_lengths(#[case] length: usize) {
    let s = "1".repeat(length);
    assert_eq!(Shape::detect(&s), None);
    assert!(!cpfcnpj::is_valid(&s));
    assert!(!cpf::is_valid(&s));
    assert!(!cnpj::is_valid(&s));
    assert_eq!(cpfcnpj::format(&s), s);
    assert_eq!(cpfcnpj::filter(&s), s);
}

#[test]
fn test_length_14_routes_on_index_3() {
    // Every character at index 3 of an otherwise valid formatted CPF.
    for c in (0u8..128).map(char::from) {
        let mut s = String::from("111.444.777-35");
        s.replace_range(3..4, &c.to_string());
        let kind = Shape::detect(&s).map(Shape::kind);
        if c == '.' {
            assert_eq!(kind, Some(Kind::Cpf));
            assert_eq!(cpfcnpj::is_valid(&s), cpf::is_valid(&s));
        } else {
            assert_eq!(kind, Some(Kind::Cnpj));
            assert_eq!(cpfcnpj::is_valid(&s), cnpj::is_valid(&s));
            assert!(!cpfcnpj::is_valid(&s));
        }
    }
}

#[test]
fn test_non_ascii_input_does_not_panic() {
    for s in ["١١١٤٤٤٧٧٧٣٥", "111.444.777–35", "ññ.ñññ.ñññ/ññññ-ññ", "11144477735\u{301}"] {
        assert!(!cpfcnpj::is_valid(s));
        let _ = cpfcnpj::format(s);
        let _ = cpfcnpj::filter(s);
        assert!(s.parse::<cpfcnpj::Document>().is_err());
    }
}
