use statrs::distribution::{ContinuousCDF, StudentsT};
use statrs::statistics::Statistics;

use crate::error::MetaSimErr;
use crate::study::error::StudySimError;
use crate::study::types::{TTestKind, TTestResult};

/// Two-sided two-sample t-test of `treatment` against `control`. The statistic
/// is positive when the treatment mean is larger.
pub fn two_sample_t_test(
    treatment: &[f64],
    control: &[f64],
    kind: TTestKind,
) -> Result<TTestResult, MetaSimErr> {
    let (n1, n2) = (treatment.len(), control.len());
    if n1 < 2 || n2 < 2 {
        return Err(StudySimError::TooFewObservations(n1, n2).into());
    }
    let (n1, n2) = (n1 as f64, n2 as f64);
    let mean_diff = treatment.iter().mean() - control.iter().mean();
    let var1 = treatment.iter().variance();
    let var2 = control.iter().variance();

    let (se, df) = match kind {
        TTestKind::Student => {
            let df = n1 + n2 - 2.0;
            let pooled_var = ((n1 - 1.0) * var1 + (n2 - 1.0) * var2) / df;
            ((pooled_var * (1.0 / n1 + 1.0 / n2)).sqrt(), df)
        }
        TTestKind::Welch => {
            let a = var1 / n1;
            let b = var2 / n2;
            let df = (a + b).powi(2) / (a * a / (n1 - 1.0) + b * b / (n2 - 1.0));
            ((a + b).sqrt(), df)
        }
    };

    let t = mean_diff / se;
    let t_dist = StudentsT::new(0.0, 1.0, df).map_err(|e| StudySimError::Distribution {
        name: "Student's t",
        reason: e.to_string(),
    })?;
    let p_value = (2.0 * t_dist.sf(t.abs())).min(1.0);

    Ok(TTestResult { t, df, p_value })
}

#[cfg(test)]
mod tests {
    use super::*;

    // pooled: t = 3.5151, df = 8, p = 0.007902
    // welch: df = 7.0039, p = 0.009783
    const TRT: [f64; 5] = [5.1, 4.9, 6.2, 5.8, 6.0];
    const CTRL: [f64; 5] = [4.1, 4.5, 5.0, 4.8, 4.2];

    #[test]
    fn student_known_values() {
        let res = two_sample_t_test(&TRT, &CTRL, TTestKind::Student).unwrap();
        assert_eq!(res.df, 8.0);
        assert!((res.t - 3.5151).abs() < 0.0001);
        assert!((res.p_value - 0.007902).abs() < 0.00001);
    }

    #[test]
    fn welch_same_t_for_equal_groups() {
        let student = two_sample_t_test(&TRT, &CTRL, TTestKind::Student).unwrap();
        let welch = two_sample_t_test(&TRT, &CTRL, TTestKind::Welch).unwrap();
        assert!((student.t - welch.t).abs() < 1e-12);
        assert!((welch.df - 7.0039).abs() < 0.0001);
        assert!((welch.p_value - 0.009783).abs() < 0.00001);
    }

    #[test]
    fn sign_follows_treatment() {
        let res = two_sample_t_test(&CTRL, &TRT, TTestKind::Student).unwrap();
        assert!(res.t < 0.0);
    }

    #[test]
    fn single_observation_error() {
        if let Err(e) = two_sample_t_test(&[1.0], &CTRL, TTestKind::Student) {
            assert_eq!(
                String::from(
                    "while simulating study: \
                     each group needs at least 2 observations; got 1 and 5"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }
}
