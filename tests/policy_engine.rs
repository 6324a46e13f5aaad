use passmeter::generators::charset;
use passmeter::{CharacterClass, ClassSet, GenerationRequest, GeneratorError, PasswordPolicyEngine, StrengthLevel};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn every_nonempty_class_set() -> Vec<ClassSet> {
    (1u8..16)
        .map(|mask| {
            CharacterClass::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, c)| *c)
                .collect()
        })
        .collect()
}

#[test]
fn every_class_combination_respects_length_and_alphabet() {
    let engine = PasswordPolicyEngine::new();
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    for classes in every_nonempty_class_set() {
        let alphabet = charset::build(&classes);
        for length in [4, 9, 17, 32] {
            let request = GenerationRequest::new(length, classes);
            let password = engine.generate_with_rng(&request, &mut rng).unwrap();
            assert_eq!(password.len(), length, "classes {classes}");
            assert!(
                password.bytes().all(|b| alphabet.contains(&b)),
                "{password} escapes alphabet for {classes}"
            );
        }
    }
}

#[test]
fn empty_selection_never_generates() {
    let engine = PasswordPolicyEngine::new();
    let request = GenerationRequest::new(12, ClassSet::empty());
    assert_eq!(engine.generate(&request), Err(GeneratorError::EmptySelection));
    assert!(engine.generate_with_report(&request).is_err());
}

#[test]
fn documented_strength_examples() {
    let engine = PasswordPolicyEngine::new();
    let upper_lower: ClassSet = "upper,lower".parse().unwrap();
    let upper: ClassSet = "upper".parse().unwrap();

    assert_eq!(engine.classify_strength(5, &ClassSet::all()), StrengthLevel::TooWeak);
    assert_eq!(engine.classify_strength(8, &upper_lower), StrengthLevel::Weak);
    assert_eq!(engine.classify_strength(20, &ClassSet::all()), StrengthLevel::Strong);
    assert_eq!(engine.classify_strength(12, &upper), StrengthLevel::TooWeak);
}

#[test]
fn strength_never_exceeds_class_count_or_tier() {
    let engine = PasswordPolicyEngine::new();
    for classes in every_nonempty_class_set() {
        for length in 1..=40 {
            let level = engine.classify_strength(length, &classes).value() as usize;
            let cap = match length {
                0..=5 => 1,
                6..=9 => 2,
                10..=13 => 3,
                _ => 4,
            };
            assert!(level >= 1);
            assert!(level <= cap);
            assert!(length < 6 || level <= classes.len());
            if length >= 6 {
                assert_eq!(level, classes.len().min(cap));
            }
        }
    }
}
