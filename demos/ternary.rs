use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use ternary_mix::{ColorMixer, Frame, LinearRgbMixer, MixConfig, Pair,
                  Session, Viewport};

type Err = Box<dyn Error>;

fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn bar(fh: &mut impl Write, colors: &[RGB8], selected: usize,
       width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for (i, &c) in colors.iter().enumerate() {
        let border = if i == selected { "outline: 2px solid black;" }
                     else { "" };
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}; {border}\"></td>",
                 css_string(c))?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td>\
                  </tr></table><br/>")?;
    Ok(())
}

fn field(fh: &mut impl Write, frame: &Frame<RGB8>) -> Result<(), Err> {
    let Viewport { width, height } = frame.viewport;
    writeln!(fh, "<svg width=\"{width}\" height=\"{height}\" \
                  shape-rendering=\"crispEdges\">")?;
    for p in &frame.field {
        writeln!(fh, "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" \
                      fill=\"{}\"/>",
                 p.cell.x, p.cell.y, p.cell.width, p.cell.height,
                 css_string(p.color))?;
    }
    writeln!(fh, "</svg>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut args = env::args().skip(1);
    let texts = [args.next().unwrap_or_else(|| "#e60012".into()),
                 args.next().unwrap_or_else(|| "#fff100".into()),
                 args.next().unwrap_or_else(|| "#1d2088".into())];
    let mut session = Session::parse(
        LinearRgbMixer, [texts[0].as_str(), texts[1].as_str(), texts[2].as_str()],
        MixConfig::default())?;
    session.on_step_click(Pair::BC, 10);
    session.on_resize(Viewport::equilateral(500));
    let frame = session.on_frame().ok_or("no frame after resize")?;

    let mut fh = BufWriter::new(File::create("ternary.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>ternary-mix: {}</title>\n\
                  </head>\n\
                  <body>",
             session.palette_hex().join(", "))?;
    writeln!(fh, "<h3>Pairs</h3>")?;
    for view in &frame.bars {
        let colors: Vec<_> = view.steps.iter().map(|s| s.color).collect();
        let selected = view.selected().map_or(0, |s| s.index);
        let (i, j) = view.pair.colors();
        let (a, b) = view.label;
        let mut comment = format!("color {} {a}% / color {} {b}%",
                                  i + 1, j + 1);
        if view.is_active() { comment.push_str(" (active)") }
        bar(&mut fh, &colors, selected, 13, &comment)?;
    }

    writeln!(fh, "<h3>Field</h3>")?;
    field(&mut fh, &frame)?;
    let centroid = frame.viewport.triangle()
        .and_then(|t| session.sample_at(t.centroid()));
    if let Some(s) = centroid {
        let [a, b, c] = s.percentages;
        writeln!(fh, "<p>color 1 {a}% / color 2 {b}% / color 3 {c}% → {}</p>",
                 session.mixer().to_hex(&s.color))?;
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
