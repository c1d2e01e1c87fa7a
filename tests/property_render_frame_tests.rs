use approx::assert_abs_diff_eq;
use litechart::api::{LineOptions, PaneOptions};
use litechart::render::{RenderFrame, pane_heights};
use litechart::{ChartOptions, create_chart};
use proptest::prelude::*;

proptest! {
    #[test]
    fn pane_heights_always_sum_to_total(
        total in 1u32..4_000u32,
        ratios in prop::collection::vec(0.01f64..100.0f64, 1..8)
    ) {
        let heights = pane_heights(total, &ratios);
        prop_assert_eq!(heights.len(), ratios.len());
        prop_assert_eq!(heights.iter().sum::<u32>(), total);

        let ratio_sum: f64 = ratios.iter().sum();
        let last = ratios.len() - 1;
        for (index, height) in heights.iter().enumerate().take(last) {
            let exact = f64::from(total) * ratios[index] / ratio_sum;
            assert_abs_diff_eq!(f64::from(*height), exact, epsilon = 1.0);
        }
    }

    #[test]
    fn identical_charts_serialize_identically(
        ratios in prop::collection::vec(0.1f64..10.0f64, 1..5),
        points in prop::collection::vec((0i64..100_000i64, -1e4f64..1e4f64), 0..32)
    ) {
        let build = || {
            let mut chart = create_chart(ChartOptions::new(1_024, 768)).expect("chart");
            for ratio in &ratios {
                let data: Vec<Vec<f64>> = points
                    .iter()
                    .map(|(time, value)| vec![*time as f64, *value])
                    .collect();
                chart
                    .add_pane(PaneOptions::with_height_ratio(*ratio))
                    .expect("pane")
                    .add_line_series(LineOptions::default())
                    .set_data(data)
                    .expect("data");
            }
            chart
        };

        let a = RenderFrame::build(&build()).expect("frame a");
        let b = RenderFrame::build(&build()).expect("frame b");
        prop_assert_eq!(a.config_json(), b.config_json());
        prop_assert_eq!(a.container_id(), b.container_id());
        prop_assert_eq!(a.pane_count(), ratios.len());
    }
}
