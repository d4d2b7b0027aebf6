use imgnorm::logging::init_logging;
use imgnorm::{
    CropPolicy, Error, ImageNormalizer, ResampleFilter, Size, TransformConfig, crop_center,
    move_channel_axis, resize_short_edge,
};
use ndarray::{Array3, Axis};

fn normalizer(config: TransformConfig) -> ImageNormalizer {
    init_logging("imgnorm=debug");
    ImageNormalizer::new(config).expect("valid config")
}

fn checkerboard(rows: usize, cols: usize) -> Array3<u8> {
    Array3::from_shape_fn((rows, cols, 3), |(y, x, c)| {
        if (y / 4 + x / 4) % 2 == 0 {
            [200, 40, 90][c]
        } else {
            [10, 250, 130][c]
        }
    })
}

#[test]
fn scenario_400x300_to_224() {
    let config = TransformConfig {
        target_size: Size::ShortEdge(224),
        resize_dim: 256,
        ..TransformConfig::default()
    };

    let image = checkerboard(400, 300);
    let resized = resize_short_edge(image.view(), Size::ShortEdge(256), ResampleFilter::Bilinear).unwrap();
    assert_eq!(resized.dim(), (341, 256, 3));

    let out = normalizer(config).transform(image.view()).unwrap();
    assert_eq!(out.offset, 0);
    assert_eq!(out.image.dim(), (224, 224, 3));
}

#[test]
fn output_shape_ignores_input_channel_position() {
    let hwc = checkerboard(120, 90);
    for channel_axis in [0isize, 1, 2, -1, -2, -3] {
        let input = move_channel_axis(hwc.view(), -1, channel_axis).unwrap();
        let config = TransformConfig {
            target_size: Size::ShortEdge(64),
            resize_dim: 72,
            channel_axis,
            ..TransformConfig::default()
        };
        let out = normalizer(config).transform(input.view()).unwrap();
        assert_eq!(out.image.dim(), (64, 64, 3), "channel_axis={}", channel_axis);
    }
}

#[test]
fn input_layout_does_not_change_values() {
    let hwc = checkerboard(50, 70);
    let chw = move_channel_axis(hwc.view(), -1, 0).unwrap();
    let base = TransformConfig {
        target_size: Size::ShortEdge(32),
        resize_dim: 40,
        ..TransformConfig::imagenet()
    };

    let from_hwc = normalizer(base.clone()).transform(hwc.view()).unwrap();
    let from_chw = normalizer(TransformConfig {
        channel_axis: 0,
        ..base
    })
    .transform(chw.view())
    .unwrap();

    assert_eq!(from_hwc, from_chw);
}

#[test]
fn explicit_pair_target_size() {
    let config = TransformConfig {
        target_size: Size::Fixed {
            height: 100,
            width: 60,
        },
        resize_dim: 128,
        ..TransformConfig::default()
    };
    let out = normalizer(config).transform(checkerboard(300, 200).view()).unwrap();
    assert_eq!(out.image.dim(), (100, 60, 3));
}

#[test]
fn target_channel_axis_moves_output_channels() {
    let config = TransformConfig {
        target_size: Size::ShortEdge(16),
        resize_dim: 20,
        target_channel_axis: 0,
        ..TransformConfig::default()
    };
    let out = normalizer(config.clone()).transform(checkerboard(40, 30).view()).unwrap();
    assert_eq!(out.image.dim(), (3, 16, 16));

    let last = normalizer(TransformConfig {
        target_channel_axis: -1,
        ..config
    })
    .transform(checkerboard(40, 30).view())
    .unwrap();
    assert_eq!(move_channel_axis(out.image.view(), 0, -1).unwrap(), last.image);
}

#[test]
fn uniform_color_normalizes_to_constant() {
    let color = [180u8, 60, 255];
    let mean = [0.485f32, 0.456, 0.406];
    let std = [0.229f32, 0.224, 0.225];

    for (rows, cols) in [(300, 400), (257, 513), (224, 224), (1000, 260)] {
        let image = Array3::from_shape_fn((rows, cols, 3), |(_, _, c)| color[c]);
        let out = normalizer(TransformConfig::imagenet()).transform(image.view()).unwrap();

        for (c, channel) in out.image.axis_iter(Axis(2)).enumerate() {
            let expected = (color[c] as f32 / 255.0 - mean[c]) / std[c];
            // at most one 8-bit step of resampling error
            let tolerance = 1.0 / 255.0 / std[c] + 1e-5;
            assert!(
                channel.iter().all(|v| (v - expected).abs() <= tolerance),
                "{}x{} channel {}",
                rows,
                cols,
                c
            );
        }
    }
}

#[test]
fn resize_dim_equal_to_target_keeps_whole_square_image() {
    let image = checkerboard(90, 90);
    let config = TransformConfig {
        target_size: Size::ShortEdge(48),
        resize_dim: 48,
        ..TransformConfig::default()
    };

    let resized = resize_short_edge(image.view(), Size::ShortEdge(48), ResampleFilter::Bilinear).unwrap();
    let cropped = crop_center(resized.view(), Size::ShortEdge(48)).unwrap();
    assert_eq!(cropped.image, resized);

    let out = normalizer(config).transform(image.view()).unwrap();
    let expected = resized.mapv(|v| v as f32 / 255.0);
    assert_eq!(out.image, expected);
}

#[test]
fn invalid_channel_axis_is_rejected_per_call() {
    let config = TransformConfig {
        channel_axis: 5,
        ..TransformConfig::default()
    };
    let err = normalizer(config).transform(checkerboard(300, 300).view()).unwrap_err();
    assert!(matches!(err, Error::InvalidAxis { axis: 5, ndim: 3 }));
}

#[test]
fn resize_dim_below_target_is_a_crop_error() {
    let config = TransformConfig {
        target_size: Size::ShortEdge(224),
        resize_dim: 10,
        ..TransformConfig::default()
    };
    let err = normalizer(config).transform(checkerboard(64, 64).view()).unwrap_err();
    assert!(matches!(
        err,
        Error::CropSize {
            target_height: 224,
            target_width: 224,
            height: 10,
            width: 10
        }
    ));
}

#[test]
fn non_numeric_target_size_fails_at_construction() {
    let err = TransformConfig::from_json_str(r#"{"target_size": "abc"}"#).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(matches!("abc".parse::<Size>(), Err(Error::Config { .. })));

    let zero = ImageNormalizer::new(TransformConfig {
        resize_dim: 0,
        ..TransformConfig::default()
    });
    assert!(matches!(zero, Err(Error::Config { .. })));
}

#[test]
fn four_channel_input_is_rejected() {
    let image = Array3::<u8>::zeros((300, 300, 4));
    let err = normalizer(TransformConfig::default()).transform(image.view()).unwrap_err();
    assert!(matches!(
        err,
        Error::ChannelCount {
            expected: 3,
            actual: 4
        }
    ));
}

#[test]
fn caller_array_is_left_untouched() {
    let image = checkerboard(64, 80);
    let before = image.clone();
    let config = TransformConfig {
        target_size: Size::ShortEdge(32),
        resize_dim: 40,
        ..TransformConfig::imagenet()
    };
    normalizer(config).transform(image.view()).unwrap();
    assert_eq!(image, before);
}

#[test]
fn seeded_random_crop_is_deterministic_across_calls() {
    let config = TransformConfig {
        target_size: Size::ShortEdge(24),
        resize_dim: 40,
        crop_policy: CropPolicy::Random { seed: Some(9) },
        ..TransformConfig::default()
    };
    let normalizer = normalizer(config);
    let image = checkerboard(80, 120);
    let first = normalizer.transform(image.view()).unwrap();
    let second = normalizer.transform(image.view()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.image.dim(), (24, 24, 3));
}

#[test]
fn shared_across_threads() {
    let normalizer = normalizer(TransformConfig {
        target_size: Size::ShortEdge(32),
        resize_dim: 36,
        ..TransformConfig::imagenet()
    });
    let expected = normalizer.transform(checkerboard(60, 90).view()).unwrap();

    let shared = &normalizer;
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || shared.transform(checkerboard(60, 90).view()).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn float_and_wide_samples_are_accepted() {
    let config = TransformConfig {
        target_size: Size::ShortEdge(20),
        resize_dim: 20,
        ..TransformConfig::default()
    };
    let normalizer = normalizer(config);

    let as_u8 = Array3::<u8>::from_elem((20, 20, 3), 100);
    let as_f64 = Array3::<f64>::from_elem((20, 20, 3), 100.0);
    let as_u16 = Array3::<u16>::from_elem((20, 20, 3), 100);

    let expected = normalizer.transform(as_u8.view()).unwrap();
    assert_eq!(normalizer.transform(as_f64.view()).unwrap(), expected);
    assert_eq!(normalizer.transform(as_u16.view()).unwrap(), expected);
}

#[test]
fn logging_init_is_idempotent() {
    init_logging("imgnorm=info");
    assert!(!init_logging("imgnorm=info"));
}

#[test]
fn precise_crop_runs_through_transform() {
    let config = TransformConfig::from_json_str(
        r#"{
            "target_size": [4, 6],
            "resize_dim": 20,
            "img_mean": [0.5, 0.25, 0.0],
            "img_std": [0.5, 0.5, 2.0],
            "target_channel_axis": 0,
            "crop_policy": {"how": "precise", "top": 3, "left": 5}
        }"#,
    )
    .unwrap();
    let mean = config.img_mean;
    let std = config.img_std;

    // 20x20 already matches resize_dim, so the crop reads the input samples directly
    let image = Array3::from_shape_fn((20, 20, 3), |(y, x, c)| (y * 10 + x + c * 3) as u8);
    let out = normalizer(config).transform(image.view()).unwrap();
    assert_eq!(out.image.dim(), (3, 4, 6));

    for c in 0..3 {
        for y in 0..4 {
            for x in 0..6 {
                let raw = image[[y + 3, x + 5, c]] as f32;
                let expected = (raw / 255.0 - mean[c]) / std[c];
                assert!((out.image[[c, y, x]] - expected).abs() < 1e-6, "c={} y={} x={}", c, y, x);
            }
        }
    }
}

#[test]
fn precise_crop_outside_resized_image_fails() {
    let config = TransformConfig {
        target_size: Size::ShortEdge(8),
        resize_dim: 10,
        crop_policy: CropPolicy::Precise { top: 0, left: 3 },
        ..TransformConfig::default()
    };
    let err = normalizer(config).transform(checkerboard(10, 10).view()).unwrap_err();
    assert!(matches!(err, Error::CropSize { .. }));
}
