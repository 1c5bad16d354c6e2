use super::DelayResult;
use super::RiskBand;

fn result_with_score(risk_score: f64) -> DelayResult {
    return DelayResult {
        prediction: "DELAYED".to_string(),
        probability: 0.5,
        risk_score,
    };
}

#[test]
fn it_classifies_high_scores_as_elevated() {
    assert_eq!(result_with_score(55.0).risk_band(), RiskBand::Elevated);
}

#[test]
fn it_classifies_low_scores_as_nominal() {
    assert_eq!(result_with_score(30.0).risk_band(), RiskBand::Nominal);
}

#[test]
fn it_keeps_the_threshold_itself_nominal() {
    assert_eq!(result_with_score(40.0).risk_band(), RiskBand::Nominal);
}
