//! Swarm Vote entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_demo {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, HtmlInputElement, HtmlSelectElement, MouseEvent, PageTransitionEvent, Window,
    };

    use swarm_vote::Settings;
    use swarm_vote::hud::{self, AgentDetail, Shown};
    use swarm_vote::platform::{FrameLoop, LoopAction, PageTransition, loop_action};
    use swarm_vote::proposals::{PRESET_PROPOSALS, preset_index};
    use swarm_vote::renderer::{CanvasSurface, paint_frame};
    use swarm_vote::sim::{SwarmEvent, SwarmState, TickInput, tick};

    const CANVAS_ID: &str = "swarm-canvas";

    /// Demo instance holding all state
    struct Demo {
        state: SwarmState,
        input: TickInput,
        settings: Settings,
        surface: Option<CanvasSurface>,
        /// Surface lookup failed and was already logged
        surface_warned: bool,
        /// Pointer in canvas pixels, None when outside
        pointer: Option<Vec2>,
        /// Pointer in viewport pixels, for tooltip placement
        client_pointer: (f64, f64),
        tooltip_shown: Shown<Option<AgentDetail>>,
        tooltip_pos: Shown<(f64, f64)>,
        banner_shown: Shown<Option<String>>,
    }

    impl Demo {
        fn new(seed: u64, settings: Settings) -> Self {
            Self {
                state: SwarmState::new(seed, settings.agent_count, settings.speed),
                input: TickInput::default(),
                settings,
                surface: None,
                surface_warned: false,
                pointer: None,
                client_pointer: (0.0, 0.0),
                tooltip_shown: Shown::default(),
                tooltip_pos: Shown::default(),
                banner_shown: Shown::default(),
            }
        }

        /// Step (if running) then paint, every frame
        fn frame(&mut self, time: f64) {
            let input = self.input.clone();
            self.input.clear();

            for event in tick(&mut self.state, &input) {
                if let SwarmEvent::Finished(outcome) = event {
                    log::info!(
                        "Swarm decided {} on \"{}\"",
                        outcome.winner.as_str(),
                        self.settings.proposal
                    );
                }
            }

            self.ensure_surface();
            let painted = paint_frame(self.surface.as_mut(), self.state.agents(), time);
            if !painted {
                log::trace!("Frame skipped: no surface");
            }
        }

        /// Acquire the canvas once it is mounted
        fn ensure_surface(&mut self) {
            if self.surface.is_some() {
                return;
            }
            match CanvasSurface::from_element_id(CANVAS_ID) {
                Ok(surface) => {
                    log::info!("Canvas surface acquired");
                    self.surface = Some(surface);
                    self.surface_warned = false;
                }
                Err(e) if !self.surface_warned => {
                    log::warn!("Canvas unavailable, skipping frames: {}", e);
                    self.surface_warned = true;
                }
                Err(_) => {}
            }
        }

        fn hovered(&self) -> Option<AgentDetail> {
            self.pointer
                .and_then(|p| self.state.agent_at(p))
                .map(AgentDetail::from_agent)
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self, document: &Document) {
            let tally = self.state.tally();
            for (label, count) in hud::result_rows(&tally) {
                let id = format!("stat-{}", label.to_lowercase());
                set_text(document, &id, &count.to_string());
            }
            set_text(document, "standing", hud::standing_label(tally.standing()));
            set_text(document, "run-btn", hud::run_button_label(self.state.running));
            set_text(
                document,
                "agent-count-value",
                &self.state.agent_count().to_string(),
            );
            set_text(document, "speed-value", &hud::speed_label(self.state.speed()));
            set_text(document, "proposal-text", &self.settings.proposal);

            let banner = hud::outcome_banner(self.state.outcome().as_ref());
            if self.banner_shown.update(banner.clone()) {
                match banner {
                    Some(text) => {
                        set_text(document, "result-banner", &text);
                        set_class(document, "result-banner", "");
                    }
                    None => set_class(document, "result-banner", "hidden"),
                }
            }

            self.update_tooltip(document);
        }

        fn update_tooltip(&mut self, document: &Document) {
            let Some(tooltip) = document.get_element_by_id("tooltip") else {
                return;
            };
            let hovered = self.hovered();
            let visible = hovered.is_some();

            if self.tooltip_shown.update(hovered.clone()) {
                match hovered {
                    Some(detail) => {
                        tooltip.set_inner_html("");
                        for line in &detail.lines() {
                            if let Ok(row) = document.create_element("div") {
                                row.set_text_content(Some(line));
                                let _ = tooltip.append_child(&row);
                            }
                        }
                        let _ = tooltip.set_attribute("class", "tooltip");
                    }
                    None => {
                        let _ = tooltip.set_attribute("class", "tooltip hidden");
                    }
                }
            }

            if visible && self.tooltip_pos.update(self.client_pointer) {
                let (x, y) = self.client_pointer;
                let _ = tooltip.set_attribute(
                    "style",
                    &format!("left: {}px; top: {}px;", x + 12.0, y + 12.0),
                );
            }
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            if el.text_content().as_deref() != Some(text) {
                el.set_text_content(Some(text));
            }
        }
    }

    fn set_class(document: &Document, id: &str, class: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", class);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Swarm Vote starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let demo = Rc::new(RefCell::new(Demo::new(seed, settings)));
        log::info!("Swarm initialized with seed: {}", seed);

        init_controls(&document, &demo.borrow().settings);
        setup_controls(&document, demo.clone());
        setup_canvas_pointer(&document, demo.clone());

        let handle = Rc::new(RefCell::new(start_loop(&demo, &document)));
        if handle.borrow().is_some() {
            log::info!("Swarm Vote running!");
        }
        watch_page_lifecycle(&window, &document, demo, handle);
    }

    /// Run `frame` and the HUD update every display frame
    fn start_loop(demo: &Rc<RefCell<Demo>>, document: &Document) -> Option<FrameLoop> {
        let demo = demo.clone();
        let document = document.clone();
        let started = FrameLoop::start(move |time| {
            let mut d = demo.borrow_mut();
            d.frame(time);
            d.update_hud(&document);
        });
        match started {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::error!("Could not start frame loop: {}", e);
                None
            }
        }
    }

    /// Release the loop on unload and bring it back when the page is shown again
    fn watch_page_lifecycle(
        window: &Window,
        document: &Document,
        demo: Rc<RefCell<Demo>>,
        handle: Rc<RefCell<Option<FrameLoop>>>,
    ) {
        for (event_name, is_show) in [("pagehide", false), ("pageshow", true)] {
            let demo = demo.clone();
            let handle = handle.clone();
            let document = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PageTransitionEvent| {
                let persisted = event.persisted();
                let transition = if is_show {
                    PageTransition::Show { persisted }
                } else {
                    PageTransition::Hide { persisted }
                };
                let loop_running = handle.borrow().is_some();
                match loop_action(transition, loop_running) {
                    LoopAction::Keep => {}
                    LoopAction::Stop => {
                        handle.borrow_mut().take();
                        log::info!("Page unloaded, frame loop stopped");
                    }
                    LoopAction::Restart => {
                        let restarted = start_loop(&demo, &document);
                        if restarted.is_some() {
                            log::info!("Page shown again, frame loop restarted");
                        }
                        *handle.borrow_mut() = restarted;
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Reflect persisted settings in the form controls
    fn init_controls(document: &Document, settings: &Settings) {
        if let Some(input) = input_by_id(document, "agent-count") {
            input.set_value(&settings.agent_count.to_string());
        }
        if let Some(input) = input_by_id(document, "speed") {
            input.set_value(&settings.speed.to_string());
        }
        if let Some(input) = input_by_id(document, "proposal-input") {
            input.set_value(&settings.proposal);
        }
        if let Some(select) = select_by_id(document, "proposal-select") {
            if select.options().length() == 0 {
                for (i, text) in PRESET_PROPOSALS.iter().enumerate() {
                    if let Ok(option) =
                        web_sys::HtmlOptionElement::new_with_text_and_value(text, &i.to_string())
                    {
                        let _ = select.add_with_html_option_element(&option);
                    }
                }
            }
            let selected = preset_index(&settings.proposal).map(|i| i as i32).unwrap_or(-1);
            select.set_selected_index(selected);
        }
    }

    fn input_by_id(document: &Document, id: &str) -> Option<HtmlInputElement> {
        document.get_element_by_id(id)?.dyn_into().ok()
    }

    fn select_by_id(document: &Document, id: &str) -> Option<HtmlSelectElement> {
        document.get_element_by_id(id)?.dyn_into().ok()
    }

    fn on_click(document: &Document, id: &str, mut handler: impl FnMut() + 'static) {
        if let Some(btn) = document.get_element_by_id(id) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| handler());
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn on_input(document: &Document, id: &str, mut handler: impl FnMut(String) + 'static) {
        if let Some(el) = document.get_element_by_id(id) {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                let value = event
                    .target()
                    .and_then(|t| {
                        t.clone()
                            .dyn_into::<HtmlInputElement>()
                            .map(|i| i.value())
                            .or_else(|_| t.dyn_into::<HtmlSelectElement>().map(|s| s.value()))
                            .ok()
                    })
                    .unwrap_or_default();
                handler(value);
            });
            let _ = el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_controls(document: &Document, demo: Rc<RefCell<Demo>>) {
        {
            let demo = demo.clone();
            on_click(document, "run-btn", move || {
                demo.borrow_mut().input.toggle_run = true;
            });
        }
        {
            let demo = demo.clone();
            on_click(document, "reset-btn", move || {
                demo.borrow_mut().input.reset = true;
            });
        }
        {
            let demo = demo.clone();
            on_input(document, "agent-count", move |value| {
                if let Ok(count) = value.parse::<usize>() {
                    let mut d = demo.borrow_mut();
                    d.input.agent_count = Some(count);
                    d.settings.agent_count = count;
                    d.settings.save();
                }
            });
        }
        {
            let demo = demo.clone();
            on_input(document, "speed", move |value| {
                if let Ok(speed) = value.parse::<f32>() {
                    let mut d = demo.borrow_mut();
                    d.input.speed = Some(speed);
                    d.settings.speed = speed;
                    d.settings.save();
                }
            });
        }
        {
            let demo = demo.clone();
            let doc = document.clone();
            on_input(document, "proposal-select", move |value| {
                if let Some(text) = value.parse::<usize>().ok().and_then(|i| PRESET_PROPOSALS.get(i)) {
                    if let Some(input) = input_by_id(&doc, "proposal-input") {
                        input.set_value(text);
                    }
                    let mut d = demo.borrow_mut();
                    d.settings.proposal = text.to_string();
                    d.settings.save();
                }
            });
        }
        {
            let doc = document.clone();
            on_input(document, "proposal-input", move |value| {
                if let Some(select) = select_by_id(&doc, "proposal-select") {
                    select.set_selected_index(preset_index(&value).map(|i| i as i32).unwrap_or(-1));
                }
                let mut d = demo.borrow_mut();
                d.settings.proposal = value;
                d.settings.save();
            });
        }
    }

    fn setup_canvas_pointer(document: &Document, demo: Rc<RefCell<Demo>>) {
        let Some(canvas) = document.get_element_by_id(CANVAS_ID) else {
            log::warn!("No #{} element; hover disabled", CANVAS_ID);
            return;
        };

        // Mouse move - translate to canvas pixels
        {
            let demo = demo.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut d = demo.borrow_mut();
                let (cx, cy) = (event.client_x() as f64, event.client_y() as f64);
                d.client_pointer = (cx, cy);
                let pointer = d.surface.as_ref().map(|s| s.client_to_surface(cx, cy));
                d.pointer = pointer;
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse leave - nothing hovered
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                demo.borrow_mut().pointer = None;
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless run: simulate one vote to completion and report it
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use swarm_vote::Settings;
    use swarm_vote::hud;
    use swarm_vote::sim::{SwarmEvent, SwarmState, TickInput, tick};

    env_logger::init();
    log::info!("Swarm Vote (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the canvas demo");

    let settings = Settings::load();
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let mut state = SwarmState::new(seed, settings.agent_count, settings.speed);
    let mut input = TickInput {
        toggle_run: true,
        ..Default::default()
    };

    println!("Proposal: {}", settings.proposal);
    println!("Seed {}, {} agents", seed, state.agent_count());

    const MAX_FRAMES: u64 = 1_000_000;
    for _ in 0..MAX_FRAMES {
        let events = tick(&mut state, &input);
        input.clear();
        if let Some(SwarmEvent::Finished(outcome)) = events
            .into_iter()
            .find(|e| matches!(e, SwarmEvent::Finished(_)))
        {
            for (label, count) in hud::result_rows(&outcome.tally) {
                println!("  {:<10} {}", label, count);
            }
            println!(
                "{} after {} frames",
                hud::outcome_banner(Some(&outcome)).unwrap_or_default(),
                state.step_count
            );
            return;
        }
    }

    log::warn!("No decision after {} frames", MAX_FRAMES);
}
