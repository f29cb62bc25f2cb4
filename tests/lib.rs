use arbitrary::Unstructured;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use regex_gen::{ErrorKind, Pattern};
use std::collections::HashSet;

fn rand_u<'a>(buf: &'a mut [u8]) -> Unstructured<'a> {
    let mut rng = rand::rng();
    rng.fill_bytes(buf);
    Unstructured::new(buf)
}

#[test]
fn scenario_alternation() {
    let mut seen = HashSet::new();
    for _ in 0..100 {
        let s = regex_gen::generate("foo(-(bar|boo))").unwrap();
        assert!(s == "foo-bar" || s == "foo-boo", "{}", s);
        seen.insert(s);
    }
    assert_eq!(seen.len(), 2);
}

#[test]
fn scenario_bounded_repeat() {
    let mut seen = HashSet::new();
    for _ in 0..100 {
        let s = regex_gen::generate("a{2,4}").unwrap();
        assert!(["aa", "aaa", "aaaa"].contains(&s.as_str()), "{}", s);
        seen.insert(s);
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn scenario_word_boundary() {
    for _ in 0..10 {
        let err = regex_gen::generate(r"\bfoo\b").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperator);
    }
    let err = regex_gen::generate(r"foo\Bbar").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedOperator);
}

#[test]
fn scenario_text_anchors() {
    for p in ["^abc$", r"\Aabc", "abc$", r"abc\z"] {
        let err = regex_gen::generate(p).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AnchorStop, "{}", p);
    }
    let err = regex_gen::generate("(?m)$abc").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AnchorStop);
    assert_eq!(regex_gen::generate("(?m)^abc$").unwrap(), "abc\n");
}

#[test]
fn parse_errors() {
    let err = regex_gen::generate("foo(").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(!err.to_string().is_empty());
}

#[test]
fn output_matches_pattern() {
    let patterns = [
        "foo(-(bar|boo))",
        "[a-z]{3,8}@example\\.(com|org)",
        r"\d{3}-\d{4}",
        r"\w+\s\W*",
        "(?i)hello (world|there)!?",
        "[^a-z]{2}[[:alpha:]]+",
        "(a|bc|def)*x+y?",
        "(?:ab){2,}",
        "..?.*",
        "(?s).{5}",
        "[\u{D7F0}-\u{E010}]{10}",
        r"\p{Greek}+",
        "(?P<year>[0-9]{4})-(?P<month>0[1-9]|1[0-2])",
        "",
    ];
    let mut rng = StdRng::seed_from_u64(42);
    for p in patterns {
        let pattern: Pattern = p.parse().unwrap();
        let re = regex::Regex::new(&format!("^(?:{})$", p)).unwrap();
        for _ in 0..200 {
            let s: String = pattern.generate(&mut rng).unwrap();
            assert!(re.is_match(&s), "{:?} does not match {}", s, p);
        }
    }
}

#[test]
fn is_deterministic() {
    let pattern: Pattern = r"(\d+|[a-f]{2,})(\.[A-Z]?)*".parse().unwrap();

    let seed = b"qwertyqwertyqwertyqwertyqwertyqwerty";
    let mut u = Unstructured::new(seed);
    let old: String = pattern.generate(&mut u).unwrap();
    for _ in 0..100 {
        u = Unstructured::new(seed);
        let s: String = pattern.generate(&mut u).unwrap();
        assert_eq!(s, old);
    }

    let a: Vec<String> = (0..20)
        .map(|_| pattern.generate(&mut StdRng::seed_from_u64(7)).unwrap())
        .collect();
    assert!(a.iter().all(|s| *s == a[0]));
}

#[test]
fn string_same_as_bytes() {
    let pattern: Pattern = "[a-zé€😀]{1,9}(x|y)".parse().unwrap();
    for _ in 0..100 {
        let mut buf = [0; 256];
        let _ = rand_u(&mut buf);
        let s: String = pattern.generate(&mut Unstructured::new(&buf)).unwrap();
        let b: Vec<u8> = pattern.generate(&mut Unstructured::new(&buf)).unwrap();
        assert_eq!(s.as_bytes(), b.as_slice());
    }
}

#[test]
fn fuzzed_input_matches() {
    let pattern: Pattern = r"[0-9]+(\.[0-9]*)?(e[+-]?[0-9]{1,3})?".parse().unwrap();
    let re = regex::Regex::new(r"^[0-9]+(\.[0-9]*)?(e[+-]?[0-9]{1,3})?$").unwrap();
    for _ in 0..100 {
        let mut buf = [0; 64];
        let mut u = rand_u(&mut buf);
        let s: String = pattern.generate(&mut u).unwrap();
        assert!(re.is_match(&s), "{}", s);
    }
}

#[test]
fn bounded_output() {
    let pattern = Pattern::builder()
        .max_repeat(100)
        .max_len(1_000)
        .build("((ab)*)*")
        .unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let mut limited = 0;
    for _ in 0..50 {
        match pattern.generate::<String, _>(&mut rng) {
            Ok(s) => assert!(s.len() <= 1_000),
            Err(e) => {
                assert_eq!(e.kind(), ErrorKind::OutputLimit);
                limited += 1;
            }
        }
    }
    assert!(limited > 0);
}
