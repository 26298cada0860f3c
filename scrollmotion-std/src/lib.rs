//! `scrollmotion-std` provides ready-made section presets on top of the `scrollmotion` JSON scene
//! format.
//!
//! The goal is to keep `scrollmotion` free of any hard-coded breakpoint sets, while this crate
//! carries the landing-page configurations as data: JSON builders, parsed scenes and a few
//! behaviour presets (navbar toggle, staggered menu reveals).

#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Section presets as scene JSON.
pub mod sections {
    use serde_json::{Value, json};

    fn fade(points: [f64; 4]) -> Value {
        json!({ "property": "opacity", "points": points, "values": [0, 1, 1, 0] })
    }

    fn rise(points: [f64; 3], values: [&str; 3]) -> Value {
        json!({ "property": "translate_y", "points": points, "values": values })
    }

    /// Wrap section objects into a scene with the given default viewport.
    pub fn scene_value(width: f64, height: f64, sections: Vec<Value>) -> Value {
        json!({
            "viewport": { "width": width, "height": height },
            "sections": sections
        })
    }

    /// Services section: the title rises through the viewport while title, copy, button,
    /// background, hero art and astronaut each fade in and out on their own window.
    ///
    /// - `top` is the section's position in the document, e.g. `"550vh"`
    pub fn services_section(top: &str) -> Value {
        json!({
            "id": "services",
            "region": { "top": top, "height": "200vh" },
            "offset": ["start end", "end start"],
            "channels": {
                "titleY": rise([0.0, 0.4, 0.7], ["50vh", "0vh", "-100vh"]),
                "titleOpacity": fade([0.0, 0.15, 0.6, 0.75]),
                "descOpacity": fade([0.15, 0.3, 0.6, 0.75]),
                "buttonOpacity": fade([0.2, 0.3, 0.6, 0.8]),
                "bgOpacity": fade([0.0, 0.15, 0.8, 1.0]),
                "heroOpacity": fade([0.1, 0.3, 0.6, 0.8]),
                "astroOpacity": fade([0.15, 0.3, 0.7, 0.8])
            }
        })
    }

    /// Second services section: the title also scales up, copy and button fade in while scaling
    /// from `0.95`.
    pub fn services_section_three(top: &str) -> Value {
        let settle = |points: [f64; 2], from: f64| {
            json!({ "property": "scale", "points": points, "values": [from, 1] })
        };
        json!({
            "id": "servicesThree",
            "region": { "top": top, "height": "200vh" },
            "offset": ["start end", "end start"],
            "channels": {
                "titleY": rise([0.0, 0.4, 0.7], ["50vh", "0vh", "-120vh"]),
                "titleOpacity": fade([0.0, 0.15, 0.6, 0.75]),
                "titleScale": { "property": "scale", "points": [0, 0.15, 0.6], "values": [0.8, 1, 1] },
                "descOpacity": fade([0.15, 0.25, 0.55, 0.7]),
                "descScale": settle([0.15, 0.25], 0.95),
                "buttonOpacity": fade([0.15, 0.25, 0.55, 0.7]),
                "buttonScale": settle([0.15, 0.25], 0.95),
                "bgOpacity": fade([0.0, 0.1, 0.85, 1.0])
            }
        })
    }

    fn blur_channels(points: [f64; 5]) -> Value {
        json!({
            "textOpacity": { "property": "opacity", "points": points, "values": [0, 1, 1, 1, 0] },
            "textBlur": {
                "property": "blur",
                "points": points,
                "values": ["40px", "10px", "0px", "0px", "40px"]
            }
        })
    }

    /// Pinned text that sharpens out of a blur and blurs away again. Viewports up to 767px wide
    /// use compressed fade points.
    pub fn blur_text_appear(top: &str) -> Value {
        json!({
            "id": "blurText",
            "region": { "top": top, "height": "450vh" },
            "offset": ["start start", "end end"],
            "channels": blur_channels([0.0, 0.05, 0.25, 0.65, 0.8]),
            "variants": [
                { "max_width_px": 767, "channels": blur_channels([0.0, 0.02, 0.1, 0.18, 0.25]) }
            ]
        })
    }

    /// The page container tracked from its top meeting the viewport top to its bottom meeting
    /// the viewport bottom. It drives no channels of its own; hosts read its progress.
    ///
    /// - `height` is the total height of everything the container holds, e.g. `"950vh"`
    pub fn home_container(height: &str) -> Value {
        json!({
            "id": "home",
            "region": { "top": "0vh", "height": height },
            "offset": ["start start", "end end"]
        })
    }

    /// Home page: a one-viewport hero, then the blur text, services and services-three sections
    /// stacked below it, all inside the tracked page container.
    pub fn home() -> Value {
        scene_value(
            1440.0,
            900.0,
            vec![
                blur_text_appear("100vh"),
                services_section("550vh"),
                services_section_three("750vh"),
                home_container("950vh"),
            ],
        )
    }
}

/// Named presets and their parsed scenes.
pub mod presets {
    use std::io::Cursor;

    use serde_json::Value;

    use crate::sections;

    /// Names accepted by [`preset_value`].
    pub const NAMES: &[&str] = &["home", "services", "services-three", "blur-text-appear"];

    /// Scene JSON for preset `name`, or `None` if there is no such preset.
    pub fn preset_value(name: &str) -> Option<Value> {
        let single = |section: Value| sections::scene_value(1440.0, 900.0, vec![section]);
        match name {
            "home" => Some(sections::home()),
            "services" => Some(single(sections::services_section("100vh"))),
            "services-three" => Some(single(sections::services_section_three("100vh"))),
            "blur-text-appear" => Some(single(sections::blur_text_appear("100vh"))),
            _ => None,
        }
    }

    /// Build and parse preset `name` into a `scrollmotion::Scene`.
    pub fn preset_scene(name: &str) -> scrollmotion::MotionResult<scrollmotion::Scene> {
        let v = preset_value(name).ok_or_else(|| {
            scrollmotion::MotionError::validation(format!(
                "unknown preset '{name}' (expected one of: {})",
                NAMES.join(", ")
            ))
        })?;
        let bytes = serde_json::to_vec(&v).map_err(|e| {
            scrollmotion::MotionError::serde(format!("json serialize failed: {e}"))
        })?;
        scrollmotion::Scene::from_reader(Cursor::new(bytes))
    }
}

/// Time-based behaviour presets.
pub mod behaviours {
    use scrollmotion::{
        Ease, Length, MotionResult, Property, ThresholdToggle, ToggleChannel, Transition, Value,
        staggered,
    };

    /// Scroll distance after which the navbar hides.
    pub const NAVBAR_THRESHOLD_PX: f64 = 50.0;

    /// Navbar that fades out and slides up 20px once the page scrolls past 50px, over 0.3s.
    pub fn navbar_toggle() -> MotionResult<ThresholdToggle> {
        ThresholdToggle::new(
            NAVBAR_THRESHOLD_PX,
            Transition::new(0.3),
            [
                ToggleChannel::new(
                    "opacity",
                    Property::Opacity,
                    Value::Number(1.0),
                    Value::Number(0.0),
                ),
                ToggleChannel::new(
                    "y",
                    Property::TranslateY,
                    Value::Length(Length::px(0.0)),
                    Value::Length(Length::px(-20.0)),
                ),
            ],
        )
    }

    fn reveal() -> Transition {
        Transition::new(0.3).eased(Ease::OutCubic)
    }

    /// Reveal timings for the menu's main items: 0.2s, then 0.1s apart.
    pub fn menu_item_transitions(count: usize) -> Vec<Transition> {
        staggered(reveal(), 0.2, 0.1, count)
    }

    /// Reveal timings for the menu's bottom links: 0.6s, then 0.05s apart.
    pub fn menu_link_transitions(count: usize) -> Vec<Transition> {
        staggered(reveal(), 0.6, 0.05, count)
    }
}
