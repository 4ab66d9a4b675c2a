use std::fmt;
use rgb::RGB8;
use ternary_mix::{geometry, ColorMixer, LinearRgbMixer, MixConfig, Pair,
                  Schedule, Session, Viewport, Weights};

/// A color is its composition in terms of the three base colors, so
/// that a blend tells exactly which weights it was made of.
#[derive(Clone, Debug, PartialEq)]
struct Share([f64; 3]);

#[derive(Debug)]
struct UnknownBase(String);

impl fmt::Display for UnknownBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown base color {:?}", self.0)
    }
}

impl std::error::Error for UnknownBase {}

struct ShareMixer;

impl ColorMixer for ShareMixer {
    type Color = Share;
    type Error = UnknownBase;

    fn parse(&self, text: &str) -> Result<Share, UnknownBase> {
        match text.trim() {
            "1" => Ok(Share([1., 0., 0.])),
            "2" => Ok(Share([0., 1., 0.])),
            "3" => Ok(Share([0., 0., 1.])),
            t => Err(UnknownBase(t.to_string())),
        }
    }

    fn mix(&self, colors: &[(&Share, f64)]) -> Share {
        assert!(colors.len() >= 2);
        assert!(colors.iter().all(|&(_, w)| w > 0.));
        let total: f64 = colors.iter().map(|&(_, w)| w).sum();
        let mut s = [0.; 3];
        for &(c, w) in colors {
            for k in 0 .. 3 { s[k] += w / total * c.0[k] }
        }
        Share(s)
    }

    fn to_hex(&self, c: &Share) -> String {
        let b = c.0.map(|x| (x * 255.).round() as u8);
        format!("#{:02X}{:02X}{:02X}", b[0], b[1], b[2])
    }
}

fn share_session() -> Session<ShareMixer> {
    Session::parse(ShareMixer, ["1", "2", "3"], MixConfig::default()).unwrap()
}

#[test_log::test]
fn patches_carry_their_weights() {
    let mut s = share_session();
    let v = Viewport::equilateral(500);
    assert_eq!(s.on_resize(v), Schedule::NextFrame);
    let frame = s.on_frame().unwrap();
    assert_eq!(frame.viewport, v);
    let t = v.triangle().unwrap();
    assert!(!frame.field.is_empty());
    for p in &frame.field {
        let w = t.weights_at(p.cell.center()).clamp_non_negative()
            .normalized().unwrap();
        for k in 0 .. 3 {
            assert!((p.color.0[k] - w.0[k]).abs() < 1e-9, "{p:?} vs {w:?}");
        }
    }
}

#[test]
fn resize_burst_is_coalesced() {
    let mut s = share_session();
    assert!(s.on_frame().is_none());
    assert_eq!(s.on_resize(Viewport::equilateral(200)), Schedule::NextFrame);
    for w in 201 ..= 260 {
        assert_eq!(s.on_resize(Viewport::equilateral(w)), Schedule::Coalesced);
    }
    let f = s.on_frame().unwrap();
    assert_eq!(f.viewport, Viewport::equilateral(260));
    assert_eq!(s.viewport(), Viewport::equilateral(260));
    assert!(s.on_frame().is_none());
    assert_eq!(s.on_resize(Viewport::equilateral(260)), Schedule::Skip);
}

#[test]
fn zero_width_renders_nothing() {
    let mut s = share_session();
    s.on_resize(Viewport::equilateral(100));
    s.on_frame().unwrap();
    assert_eq!(Viewport::from_display(0., 2.), None);
    s.on_resize(Viewport::new(0, 0));
    let f = s.on_frame().unwrap();
    assert!(f.field.is_empty());
    assert_eq!(f.bars.len(), 3);
}

#[test]
fn hover_reports_blend_and_percentages() {
    let mut s = share_session();
    let v = Viewport::from_display(300., 2.).unwrap();
    s.on_resize(v);
    s.on_frame().unwrap();
    // Pointer at the top left corner of the displayed element.
    let p = v.to_pixels(0., 0., 300., 300. * geometry::HALF_SQRT_3);
    let sample = s.sample_at(p).unwrap();
    assert_eq!(sample.percentages, [100, 0, 0]);
    assert_eq!(sample.hex(s.mixer()), "#FF0000");
    // Middle of the top edge: colors 1 and 2 half and half.
    let p = v.to_pixels(150., 0., 300., 300. * geometry::HALF_SQRT_3);
    let sample = s.sample_at(p).unwrap();
    assert_eq!(sample.percentages, [50, 50, 0]);
    // Lower left corner is outside the triangle.
    let p = v.to_pixels(1., 258., 300., 300. * geometry::HALF_SQRT_3);
    assert!(s.sample_at(p).is_none());
    // Anywhere inside, percentages add up to 100.
    let t = v.triangle().unwrap();
    for (a, b, c) in [(0.2, 0.3, 0.5), (0.01, 0.98, 0.01), (0.333, 0.333, 0.334)] {
        let sample = s.sample_at(t.point_at(&Weights([a, b, c]))).unwrap();
        assert_eq!(sample.percentages.iter().sum::<u32>(), 100);
    }
}

#[test]
fn clicks_and_bad_inputs() {
    let mut s = share_session();
    let f = s.on_step_click(Pair::try_from(0usize).unwrap(), 20);
    assert_eq!(s.ratios().ratio(Pair::AB), 0.5);
    assert_eq!(f.bars[0].label, (50, 50));
    assert_eq!(f.bars[0].steps[20].color, Share([0.5, 0.5, 0.]));
    assert_eq!(f.bars[2].steps[0].color, Share([1., 0., 0.]));
    assert_eq!(f.bars[2].steps[40].color, Share([0., 0., 1.]));

    s.on_step_click(Pair::AC, 8);
    assert_eq!(s.ratios().active_pair(), Pair::AC);
    assert_eq!(s.render_bars()[2].label, (80, 20));

    assert!(s.update_colors(["1", "2", "4"]).is_err());
    assert_eq!(s.palette_hex(), ["#FF0000", "#00FF00", "#0000FF"]);
    let f = s.update_colors(["3", "2", "1"]).unwrap();
    assert_eq!(f.bars[0].steps[0].color, Share([0., 0., 1.]));
    // Ratios survive palette changes.
    assert_eq!(s.ratios().ratio(Pair::AC), 0.2);
    assert!(Pair::try_from(3usize).is_err());
}

#[test]
fn rgb_session_from_config() {
    let config = MixConfig::from_json(r#"{ "bar_steps": 10,
                                           "max_patches_across": 50 }"#)
        .unwrap();
    let mut s = Session::parse(LinearRgbMixer, ["#ff0000", "#00ff00", "#0000ff"],
                               config).unwrap();
    s.on_resize(Viewport::equilateral(400));
    let f = s.on_frame().unwrap();
    assert!(f.bars.iter().all(|b| b.steps.len() == 11));
    assert!(f.field.iter().all(|p| p.cell.width <= 8 && p.cell.height <= 8));
    assert_eq!(f.field[0].cell.width, 8);
    let red = RGB8 { r: 255, g: 0, b: 0 };
    assert_eq!(f.bars[0].steps[0].color, red);
}
