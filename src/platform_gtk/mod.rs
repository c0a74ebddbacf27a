//! GTK4 embedding for [`PieChartEngine`].
//!
//! The adapter owns a `DrawingArea`, forwards clicks and pointer motion to the
//! engine, and queues a redraw whenever the engine reports a state change.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::PieChartEngine;
use crate::core::{DataPoint, Viewport};
use crate::error::ChartResult;
use crate::render::{CairoContextRenderer, Renderer};

pub struct GtkPieAdapter<R: Renderer + CairoContextRenderer + 'static> {
    engine: Rc<RefCell<PieChartEngine<R>>>,
    area: gtk::DrawingArea,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkPieAdapter<R> {
    #[must_use]
    pub fn new(engine: PieChartEngine<R>) -> Self {
        let viewport = engine.viewport();
        let engine = Rc::new(RefCell::new(engine));
        let area = gtk::DrawingArea::new();
        area.set_content_width(viewport.width as i32);
        area.set_content_height(viewport.height as i32);

        let draw_engine = Rc::clone(&engine);
        area.set_draw_func(move |_, context, width, height| {
            let mut engine = draw_engine.borrow_mut();
            if width > 0 && height > 0 {
                let viewport = Viewport::new(width as u32, height as u32);
                if viewport != engine.viewport() {
                    if let Err(err) = engine.set_viewport(viewport) {
                        warn!(error = %err, "failed to resize pie chart");
                    }
                }
            }
            if let Err(err) = engine.render_on_cairo_context(context) {
                warn!(error = %err, "failed to draw pie chart");
            }
        });

        let click = gtk::GestureClick::new();
        let click_engine = Rc::clone(&engine);
        let click_area = area.clone();
        click.connect_pressed(move |_, _, x, y| {
            match click_engine.borrow_mut().pointer_click(x, y) {
                Ok(Some(_)) => click_area.queue_draw(),
                Ok(None) => {}
                Err(err) => warn!(error = %err, "pie chart click failed"),
            }
        });
        area.add_controller(click);

        let motion = gtk::EventControllerMotion::new();
        let motion_engine = Rc::clone(&engine);
        let motion_area = area.clone();
        motion.connect_motion(move |_, x, y| {
            queue_draw_on_change(&motion_area, motion_engine.borrow_mut().pointer_move(x, y));
        });
        let leave_engine = Rc::clone(&engine);
        let leave_area = area.clone();
        motion.connect_leave(move |_| {
            queue_draw_on_change(&leave_area, leave_engine.borrow_mut().pointer_leave());
        });
        area.add_controller(motion);

        Self { engine, area }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    #[must_use]
    pub fn engine(&self) -> Rc<RefCell<PieChartEngine<R>>> {
        Rc::clone(&self.engine)
    }

    pub fn set_data(&self, points: Vec<DataPoint>) -> ChartResult<()> {
        self.engine.borrow_mut().set_data(points)?;
        self.area.queue_draw();
        Ok(())
    }
}

fn queue_draw_on_change(area: &gtk::DrawingArea, result: ChartResult<bool>) {
    match result {
        Ok(true) => area.queue_draw(),
        Ok(false) => {}
        Err(err) => warn!(error = %err, "pie chart pointer update failed"),
    }
}
