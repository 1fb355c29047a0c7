// Copyright 2026 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: one resizable panel per [`SurfacePreset`], each clipped to a
//! squircle by [`WebSquircle`].
//!
//! Drag a panel's bottom-right corner to resize it; the clip path follows.
//! The slider above the panels changes the smoothing factor of every panel.
//!
//! Build with: `wasm-pack build --target web demos/web_panels`
//!
//! Then serve `demos/web_panels/` and open `index.html` in a browser.
//!
//! [`SurfacePreset`]: squircle_core::preset::SurfacePreset

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::vec::Vec;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement};

use squircle_backend_web::WebSquircle;
use squircle_core::config::DEFAULT_SMOOTHING;
use squircle_core::preset::SurfacePreset;

const PANEL_W: f64 = 220.0;
const PANEL_H: f64 = 140.0;

const PANEL_COLORS: [&str; 7] = [
    "#f38ba8", // tooltip
    "#fab387", // input
    "#f9e2af", // compact
    "#a6e3a1", // showcase
    "#89b4fa", // card
    "#b4befe", // panel
    "#cba6f7", // modal
];

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no global window")?;
    let document = window.document().ok_or("no document")?;
    let body = document.body().ok_or("no body")?;

    let slider = create_slider(&document)?;
    body.append_child(&slider)?;

    let grid = create_grid(&document)?;
    body.append_child(&grid)?;

    let mut squircles = Vec::with_capacity(SurfacePreset::ALL.len());
    for (preset, color) in SurfacePreset::ALL.into_iter().zip(PANEL_COLORS) {
        let panel = create_panel(&document, preset, color)?;
        grid.append_child(&panel)?;

        let squircle = WebSquircle::preset(preset);
        squircle.attach(panel);
        squircles.push(squircle);
    }
    let squircles = Rc::new(squircles);

    let input: HtmlInputElement = slider
        .query_selector("input")?
        .ok_or("no slider input")?
        .unchecked_into();
    let on_input = {
        let input = input.clone();
        let squircles = Rc::clone(&squircles);
        Closure::wrap(Box::new(move |_event: Event| {
            let smoothing = input.value_as_number();
            if !smoothing.is_finite() {
                return;
            }
            for (squircle, preset) in squircles.iter().zip(SurfacePreset::ALL) {
                squircle.set_params(preset.params().with_smoothing(smoothing));
                squircle.refresh();
            }
        }) as Box<dyn FnMut(Event)>)
    };
    input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;

    // The panels live for the lifetime of the page.
    on_input.forget();
    core::mem::forget(squircles);

    Ok(())
}

fn create_grid(doc: &Document) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = doc.create_element("div")?.unchecked_into();
    let s = el.style();
    s.set_property("display", "flex")?;
    s.set_property("flex-wrap", "wrap")?;
    s.set_property("gap", "24px")?;
    s.set_property("align-items", "flex-start")?;
    Ok(el)
}

fn create_panel(doc: &Document, preset: SurfacePreset, color: &str) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = doc.create_element("div")?.unchecked_into();
    let s = el.style();
    s.set_property("width", &format!("{PANEL_W}px"))?;
    s.set_property("height", &format!("{PANEL_H}px"))?;
    s.set_property("min-width", "40px")?;
    s.set_property("min-height", "40px")?;
    s.set_property("padding", "16px")?;
    s.set_property("box-sizing", "border-box")?;
    s.set_property("background", color)?;
    s.set_property("color", "#11111b")?;
    s.set_property("resize", "both")?;
    s.set_property("overflow", "hidden")?;
    el.set_text_content(Some(&format!("{} · {}px", preset.name(), preset.radius())));
    Ok(el)
}

fn create_slider(doc: &Document) -> Result<HtmlElement, JsValue> {
    let label: HtmlElement = doc.create_element("label")?.unchecked_into();
    let s = label.style();
    s.set_property("display", "block")?;
    s.set_property("margin-bottom", "24px")?;
    label.set_text_content(Some("smoothing "));

    let input: HtmlInputElement = doc.create_element("input")?.unchecked_into();
    input.set_type("range");
    input.set_min("0");
    input.set_max("1");
    input.set_step("0.05");
    input.set_value(&format!("{DEFAULT_SMOOTHING}"));
    label.append_child(&input)?;
    Ok(label)
}
