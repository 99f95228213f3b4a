use crate::{
    content::place::{header, image, image_at, title, txt_at, txt_set_at, txt_set_from},
    deck::section::SectionSlides,
    foundation::core::Vec2,
    foundation::error::DeckResult,
    style::registry::StyleRegistry,
};

const BODY: &str = "gnuolane44";

fn bullets(
    slides: &mut SectionSlides<'_>,
    styles: &StyleRegistry,
    k: usize,
    lines: &[&str],
) -> DeckResult<()> {
    let body = styles.resolve(BODY)?;
    slides.extend(k, txt_set_from(body, 0.25, 0.35, 0.0, 0.07, lines)?)
}

fn scaled(factor: f64) -> Vec2 {
    Vec2::new(factor, factor)
}

pub(super) fn intro(slides: &mut SectionSlides<'_>, styles: &StyleRegistry) -> DeckResult<()> {
    let body = styles.resolve(BODY)?;
    slides.extend(
        0,
        [
            title(styles, "Oak: a pure Go game engine"),
            txt_at(body, "Patrick Stephen", 0.5, 0.6)?,
        ],
    )?;

    slides.append(1, header(styles, "Who Am I"))?;
    slides.extend(
        1,
        txt_set_at(
            body,
            0.5,
            0.63,
            0.0,
            0.07,
            &[
                "Go Architect at Ardan Labs",
                "Maintainer / Programmer of Oak",
                "github.com/200sc  github.com/oakmound/oak",
                "patrick.d.stephen@gmail.com",
                "oakmoundstudio@gmail.com",
            ],
        )?,
    )?;

    slides.append(2, header(styles, "What is Oak?"))?;
    bullets(
        slides,
        styles,
        2,
        &[
            "- Game engine in Go",
            "- Targets zero non-Go dependencies",
            "- Primarily 2D",
        ],
    )?;

    slides.append(3, header(styles, "This Talk is Not About..."))?;
    bullets(
        slides,
        styles,
        3,
        &[
            "- Optimizing Go",
            "- 3D Graphics in Go",
            "- Mobile Games in Go",
            "- Tutorializing Oak",
        ],
    )?;

    slides.append(4, header(styles, "Topics"))?;
    bullets(
        slides,
        styles,
        4,
        &[
            "- Game Engines in Go",
            "- Small Example Programs",
            "- Design Philosophy",
            "- Full, Released Games",
        ],
    )
}

pub(super) fn engines(slides: &mut SectionSlides<'_>, styles: &StyleRegistry) -> DeckResult<()> {
    slides.append(0, title(styles, "Other Game Engines in Go"))?;

    let engines: [(&str, &[&str], &str, f64); 6] = [
        (
            "Abandoned Engines",
            &["- Azul3D", "- GarageEngine", "- glop"],
            "azul_logo.PNG",
            0.25,
        ),
        (
            "Termloop",
            &["- In-Terminal Games (2D)", "- First Release: Never"],
            "termloop_maze.PNG",
            0.25,
        ),
        (
            "Engo",
            &[
                "- Primarily 2D",
                "- First Release: 1.0.0 in May 2018",
                "- Last Release: 1.0.4 in April 2019",
            ],
            "engo_logo.PNG",
            1.0,
        ),
        (
            "G3N",
            &[
                "- Primarily 3D",
                "- First Release: 0.1.0 in Sept 2019",
                "- Last Release: 0.1.0 in Sept 2019",
            ],
            "g3n_logo.PNG",
            0.5,
        ),
        (
            "Pixel",
            &[
                "- Primarily 2D",
                "- First Release: 0.5.0 in April 2017",
                "- Last Release: 0.8.0 in Oct 2018",
            ],
            "Pixel.PNG",
            0.5,
        ),
        (
            "Ebiten",
            &[
                "- Primarily 2D",
                "- Supports Mobile/WASM",
                "- First Release: 1.0.0 in June 2016",
                "- Last Release: 1.10.0-alpha in Sept 2019",
            ],
            "ebitenFlappy.PNG",
            0.5,
        ),
    ];

    for (i, (name, lines, logo, scale)) in engines.into_iter().enumerate() {
        let k = i + 1;
        slides.append(k, header(styles, name))?;
        bullets(slides, styles, k, lines)?;
        slides.append(k, image_at(logo, 0.7, 0.5, scaled(scale))?)?;
    }
    Ok(())
}

pub(super) fn examples(slides: &mut SectionSlides<'_>, styles: &StyleRegistry) -> DeckResult<()> {
    slides.append(0, title(styles, "Examples"))
}

pub(super) fn philosophy(
    slides: &mut SectionSlides<'_>,
    styles: &StyleRegistry,
) -> DeckResult<()> {
    slides.append(0, title(styles, "Design Philosophy"))?;

    slides.append(1, header(styles, "Design Philosophy"))?;
    bullets(
        slides,
        styles,
        1,
        &[
            "- No non-Go dependencies",
            "- Ease / Terseness of API",
            "- If it's useful and generic, put it in the engine",
        ],
    )?;

    for (k, first) in [(2, "updateCode1.PNG"), (3, "updateCode2.PNG")] {
        slides.append(k, header(styles, "Update Loops and Functions"))?;
        slides.extend(
            k,
            [
                image(first, 0.27, 0.4)?,
                image("updateCode3.PNG", 0.57, 0.4)?,
            ],
        )?;
    }

    slides.append(4, header(styles, "Useful Packages"))?;
    bullets(
        slides,
        styles,
        4,
        &[
            "- oak/alg/intgeom, oak/alg/floatgeom",
            "- oak/joystick",
            "- oak/render/particle",
            "- oak/entities/x/btn",
        ],
    )?;

    slides.append(5, header(styles, "oak/alg"))?;
    slides.extend(
        5,
        [
            image_at("degToRad.PNG", 0.3, 0.5, scaled(1.25))?,
            image_at("chooseX.PNG", 0.6, 0.5, scaled(1.25))?,
        ],
    )?;

    slides.append(6, header(styles, "oak/entities/x/btn"))?;
    slides.append(6, image_at("buttonCode.PNG", 0.5, 0.5, scaled(1.25))?)
}

pub(super) fn full_games(
    slides: &mut SectionSlides<'_>,
    styles: &StyleRegistry,
) -> DeckResult<()> {
    slides.append(0, title(styles, "Full Games"))
}

pub(super) fn conclusion(
    slides: &mut SectionSlides<'_>,
    styles: &StyleRegistry,
) -> DeckResult<()> {
    slides.append(0, header(styles, "Thanks To"))?;
    bullets(
        slides,
        styles,
        0,
        &[
            "- Nate Fudenberg, John Ficklin",
            "- Contributors on Github",
            "- You, Audience",
        ],
    )?;
    slides.append(1, title(styles, "Questions"))
}
