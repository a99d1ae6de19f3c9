use karmic_instruments::emotion::{
    Emotion, EmotionCategory, EmotionScores, categorize_emotion_score, get_top_emotions,
};
use karmic_instruments::error::InstrumentError;
use karmic_instruments::instruments::deq::{
    Choice, DeqResponses, Sensation, calculate_deq_scores,
};
use ts_rs::{Config, TS};

fn responses(feeling: u8, stress: u8, sensations: &[u8], ease: u8, desires: u8) -> DeqResponses {
    DeqResponses {
        feeling: Choice::try_from(feeling).unwrap(),
        stress_response: Choice::try_from(stress).unwrap(),
        physical_sensations: sensations
            .iter()
            .map(|&s| Sensation::try_from(s).unwrap())
            .collect(),
        ease: Choice::try_from(ease).unwrap(),
        desires: Choice::try_from(desires).unwrap(),
    }
}

#[test]
fn first_choice_everywhere() {
    let scores = calculate_deq_scores(&responses(1, 1, &[], 1, 1));
    assert_eq!(
        scores,
        EmotionScores {
            happiness: 50,
            sadness: 0,
            anger: 52,
            fear: 0,
            anxiety: 0,
            disgust: 0,
            relaxation: 58,
            desire: 58,
        }
    );
}

#[test]
fn neutral_feeling_contributes_nothing() {
    let scores = calculate_deq_scores(&responses(2, 2, &[], 3, 4));
    assert_eq!(scores.happiness, 0);
    assert_eq!(scores.fear, 69);
    assert_eq!(scores.anxiety, 27);
    assert_eq!(scores.disgust, 47);
    assert_eq!(scores.relaxation, 0);
}

#[test]
fn sensations_stack_including_repeats() {
    let once = calculate_deq_scores(&responses(4, 5, &[2, 6], 4, 3));
    assert_eq!(once.disgust, 53);
    assert_eq!(once.relaxation, 17);
    assert_eq!(once.anxiety, 41);

    let repeated = calculate_deq_scores(&responses(4, 5, &[6, 6], 4, 3));
    assert_eq!(repeated.disgust, 0);
    assert_eq!(repeated.relaxation, 33);
}

#[test]
fn scores_above_the_normalization_max_are_capped() {
    // happiness: 0.9 + 0.4 + 0.3 + 0.7 = 2.3 against a max of 1.8
    let happy = calculate_deq_scores(&responses(1, 3, &[4], 1, 2));
    assert_eq!(happy.happiness, 100);
    assert_eq!(happy.relaxation, 100);
    assert_eq!(happy.desire, 38);

    // anxiety: 0.9 + 0.9 + 0.6 + 0.8 + 1.0 = 4.2 against a max of 4.1
    let anxious = calculate_deq_scores(&responses(3, 4, &[1, 3], 5, 1));
    assert_eq!(anxious.anxiety, 100);
    assert_eq!(anxious.fear, 77);

    for (_, score) in happy.iter().chain(anxious.iter()) {
        assert!(score <= 100);
    }
}

#[test]
fn scoring_is_deterministic() {
    let answers = responses(5, 2, &[1, 3, 5], 4, 5);
    assert_eq!(calculate_deq_scores(&answers), calculate_deq_scores(&answers));
}

#[test]
fn out_of_range_codes_are_rejected() {
    assert!(matches!(
        Choice::try_from(0),
        Err(InstrumentError::OutOfRange { value: 0, .. })
    ));
    assert!(Choice::try_from(6).is_err());
    assert!(Sensation::try_from(6).is_ok());
    assert!(Sensation::try_from(7).is_err());
}

#[test]
fn responses_deserialize_with_range_checks() {
    let ok: DeqResponses = serde_json::from_str(
        r#"{"feeling":1,"stress_response":2,"physical_sensations":[1,6],"ease":3,"desires":4}"#,
    )
    .unwrap();
    assert_eq!(ok.physical_sensations.len(), 2);

    let missing_sensations: DeqResponses =
        serde_json::from_str(r#"{"feeling":1,"stress_response":2,"ease":3,"desires":4}"#).unwrap();
    assert!(missing_sensations.physical_sensations.is_empty());

    let bad = serde_json::from_str::<DeqResponses>(
        r#"{"feeling":9,"stress_response":2,"physical_sensations":[],"ease":3,"desires":4}"#,
    );
    assert!(bad.is_err());
}

#[test]
fn answer_codes_serialize_as_bare_numbers() {
    let responses = responses(4, 5, &[2, 6], 4, 3);
    let json = serde_json::to_value(&responses).unwrap();
    assert_eq!(json["feeling"], 4);
    assert_eq!(json["physical_sensations"], serde_json::json!([2, 6]));

    let err = serde_json::from_str::<Sensation>("7").unwrap_err();
    assert!(err.to_string().contains("sensation value 7 is outside range [1, 6]"), "{err}");
    assert!(serde_json::from_str::<Choice>("-1").is_err());
}

#[test]
fn answer_codes_are_numbers_in_bindings() {
    let cfg = Config::default();
    assert_eq!(Choice::inline(&cfg), "number");
    assert_eq!(Sensation::inline(&cfg), "number");
}

#[test]
fn category_boundaries_fall_to_the_lower_bucket() {
    let cases = [
        (0, EmotionCategory::VeryLow),
        (20, EmotionCategory::VeryLow),
        (21, EmotionCategory::Low),
        (40, EmotionCategory::Low),
        (41, EmotionCategory::Moderate),
        (60, EmotionCategory::Moderate),
        (61, EmotionCategory::High),
        (80, EmotionCategory::High),
        (81, EmotionCategory::VeryHigh),
        (100, EmotionCategory::VeryHigh),
    ];
    for (score, expected) in cases {
        assert_eq!(categorize_emotion_score(score), expected, "score {score}");
    }
}

#[test]
fn categories_never_decrease_as_score_rises() {
    let mut previous = categorize_emotion_score(0);
    for score in 1..=100 {
        let current = categorize_emotion_score(score);
        assert!(current >= previous, "score {score}");
        previous = current;
    }
}

#[test]
fn top_emotions_sorted_descending() {
    let scores = calculate_deq_scores(&responses(1, 1, &[], 1, 1));
    let top = get_top_emotions(&scores, 3);
    assert_eq!(top.len(), 3);
    assert_eq!(top[0].emotion, Emotion::Relaxation);
    assert_eq!(top[0].score, 58);
    assert_eq!(top[0].category, EmotionCategory::Moderate);
    assert_eq!(top[1].emotion, Emotion::Desire);
    assert_eq!(top[2].emotion, Emotion::Anger);
}

#[test]
fn top_emotion_ties_keep_declaration_order() {
    let top = get_top_emotions(&EmotionScores::default(), 8);
    let order: Vec<Emotion> = top.iter().map(|r| r.emotion).collect();
    assert_eq!(order, Emotion::ALL.to_vec());

    let scores = EmotionScores {
        fear: 40,
        sadness: 40,
        desire: 40,
        ..EmotionScores::default()
    };
    let top = get_top_emotions(&scores, 2);
    assert_eq!(top[0].emotion, Emotion::Sadness);
    assert_eq!(top[1].emotion, Emotion::Fear);
}

#[test]
fn top_emotions_count_is_bounded_by_channel_count() {
    let scores = EmotionScores::default();
    assert!(get_top_emotions(&scores, 0).is_empty());
    assert_eq!(get_top_emotions(&scores, 20).len(), 8);
}
