use crate::config::Config;
use crate::display::{Controller, DisplaySurface};
use crate::error::CalcError;
use crate::token::Token;
use gtk::gdk;
use gtk::prelude::*;
use gtk::{Application, Box as GtkBox, Button, Entry, Grid, Label, Window};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};

/// The window's widgets seen as a calculator display.
#[derive(Clone)]
pub struct GtkDisplay {
    input: Entry,
    trace: Label,
    status: Label,
}

impl DisplaySurface for GtkDisplay {
    fn input_text(&self) -> String {
        self.input.text().to_string()
    }

    fn set_input_text(&mut self, text: &str) {
        self.input.set_text(text);
    }

    fn trace_text(&self) -> String {
        self.trace.text().to_string()
    }

    fn set_trace_text(&mut self, text: &str) {
        self.trace.set_text(text);
    }

    fn show_error(&mut self, error: &CalcError) {
        self.status.set_text(&error.to_string());
        self.status.set_visible(true);
    }

    fn clear_error(&mut self) {
        self.status.set_text("");
        self.status.set_visible(false);
    }
}

pub fn build_ui(app: &Application, config: Config) {
    let theme = &config.theme;

    let window = Window::builder()
        .application(app)
        .title("Simple Lazy Calculator")
        .default_width(theme.width)
        .default_height(theme.height)
        .resizable(false)
        .build();

    let main_box = GtkBox::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(5)
        .margin_start(10)
        .margin_end(10)
        .margin_top(10)
        .margin_bottom(10)
        .build();
    main_box.add_css_class("calculator-box");

    // Trace of the current operation
    let trace = Label::new(Some(" "));
    trace.set_xalign(0.0);
    trace.add_css_class("trace");

    // Operand being typed; only the buttons write to it
    let input = Entry::new();
    input.set_editable(false);
    input.set_can_focus(false);
    input.set_alignment(1.0);
    input.set_vexpand(true);
    input.add_css_class("display");

    let status = Label::new(None);
    status.set_xalign(1.0);
    status.set_visible(false);
    status.add_css_class("error");

    let display = GtkDisplay {
        input: input.clone(),
        trace: trace.clone(),
        status: status.clone(),
    };
    let controller = Rc::new(RefCell::new(Controller::new(
        display,
        config.calculator.normalization,
    )));

    let button_grid = Grid::builder()
        .row_spacing(5)
        .column_spacing(5)
        .row_homogeneous(true)
        .column_homogeneous(true)
        .build();

    for (index, token) in Token::GRID.into_iter().enumerate() {
        let button = Button::with_label(token.label());
        button.add_css_class("key");
        button.set_hexpand(true);
        button.set_vexpand(true);

        let controller_clone = controller.clone();
        button.connect_clicked(move |_| {
            // failures are already on the status line
            let _ = controller_clone.borrow_mut().press(token);
        });

        let column = (index % Token::GRID_COLUMNS) as i32;
        let row = (index / Token::GRID_COLUMNS) as i32;
        button_grid.attach(&button, column, row, 1, 1);
    }

    apply_theme(&config);

    main_box.append(&trace);
    main_box.append(&input);
    main_box.append(&status);
    main_box.append(&button_grid);
    window.set_child(Some(&main_box));

    window.present();
    info!("calculator window shown");
}

fn apply_theme(config: &Config) {
    let theme = &config.theme;
    let css = format!(
        r#"
        window, .calculator-box {{
            background-color: {background};
        }}

        label.trace {{
            color: {text};
            font-family: {font};
            font-size: {trace_size}px;
            font-weight: bold;
        }}

        entry.display {{
            background-color: {background};
            color: {text};
            border: none;
            box-shadow: none;
            font-family: {font};
            font-size: {display_size}px;
            font-weight: bold;
        }}

        label.error {{
            color: #ff6b6b;
            font-family: {font};
        }}

        button.key {{
            background: {button};
            color: {button_text};
            border-radius: 0px;
            font-family: {font};
            font-size: {button_size}px;
            font-weight: bold;
        }}
        "#,
        background = theme.background_color,
        text = theme.text_color,
        button = theme.button_color,
        button_text = theme.button_text_color,
        font = theme.font_family,
        trace_size = theme.trace_font_size,
        display_size = theme.display_font_size,
        button_size = theme.button_font_size,
    );

    let provider = gtk::CssProvider::new();
    provider.load_from_string(&css);

    match gdk::Display::default() {
        Some(display) => gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        ),
        None => warn!("no default display, theme not applied"),
    }
}
