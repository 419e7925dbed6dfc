//! 設備健康評分
//!
//! 將近 24 小時的感測事件濃縮為單一產能修正係數。

use rust_decimal::Decimal;
use shortcast_core::{HealthConfig, SensorEvent};

/// 設備健康評分器
pub struct HealthScorer;

impl HealthScorer {
    /// 計算產能修正係數
    ///
    /// 每筆事件從 1.0 起算：溫度超標扣 0.2、震動超標扣 0.3，
    /// 扣分可疊加但不會低於 0.5 的下限；回傳所有事件分數的算術平均。
    /// 視窗內沒有事件時視為滿產能，回傳 1.0。
    pub fn capacity_factor(events: &[SensorEvent], config: &HealthConfig) -> Decimal {
        if events.is_empty() {
            return Decimal::ONE;
        }

        let total: Decimal = events
            .iter()
            .map(|event| Self::event_score(event, config))
            .sum();

        total / Decimal::from(events.len())
    }

    /// 單筆事件健康分數
    fn event_score(event: &SensorEvent, config: &HealthConfig) -> Decimal {
        let mut score = Decimal::ONE;

        if event.temperature > config.temperature_limit {
            score -= config.temperature_penalty;
        }
        if event.vibration > config.vibration_limit {
            score -= config.vibration_penalty;
        }

        score.max(config.score_floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn event(temperature: Decimal, vibration: Decimal) -> SensorEvent {
        SensorEvent::new(
            "M01",
            temperature,
            vibration,
            1200,
            NaiveDate::from_ymd_opt(2026, 8, 23)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        )
    }

    #[rstest]
    // 正常：不扣分
    #[case(Decimal::from(70), Decimal::new(5, 2), Decimal::ONE)]
    // 僅溫度超標：1.0 - 0.2 = 0.8
    #[case(Decimal::from(90), Decimal::new(5, 2), Decimal::new(8, 1))]
    // 僅震動超標：1.0 - 0.3 = 0.7
    #[case(Decimal::from(70), Decimal::new(9, 2), Decimal::new(7, 1))]
    // 雙重超標：1.0 - 0.2 - 0.3 = 0.5，正好落在下限
    #[case(Decimal::from(90), Decimal::new(9, 2), Decimal::new(5, 1))]
    fn test_event_score(
        #[case] temperature: Decimal,
        #[case] vibration: Decimal,
        #[case] expected: Decimal,
    ) {
        let score = HealthScorer::capacity_factor(&[event(temperature, vibration)], &HealthConfig::default());
        assert_eq!(score, expected);
    }

    #[test]
    fn test_boundary_is_not_penalized() {
        // 剛好等於門檻值不算超標（嚴格大於才扣分）
        let score = HealthScorer::capacity_factor(
            &[event(Decimal::from(85), Decimal::new(8, 2))],
            &HealthConfig::default(),
        );
        assert_eq!(score, Decimal::ONE);
    }

    #[test]
    fn test_mean_over_events() {
        let events = vec![
            event(Decimal::from(70), Decimal::new(5, 2)), // 1.0
            event(Decimal::from(90), Decimal::new(5, 2)), // 0.8
        ];
        let score = HealthScorer::capacity_factor(&events, &HealthConfig::default());
        assert_eq!(score, Decimal::new(9, 1)); // (1.0 + 0.8) / 2
    }

    #[test]
    fn test_empty_window_is_full_capacity() {
        let score = HealthScorer::capacity_factor(&[], &HealthConfig::default());
        assert_eq!(score, Decimal::ONE);
    }
}
