use leptos::html;
use leptos::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

const PARTICLE_COUNT: usize = 70;

struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    radius: f64,
    hue: f64,
}

/// Простой LCG: сцена должна выглядеть одинаково между перезагрузками
fn next_unit(seed: &mut u64) -> f64 {
    *seed = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    ((*seed >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Декоративный фон хиро-блока: медленный дрейф частиц на 2D-канвасе.
/// Контента не несёт и скрыт от скринридеров.
#[component]
pub fn HeroScene() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let started = Rc::new(Cell::new(false));

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if started.get() {
            return;
        }
        started.set(true);

        let width = canvas.client_width().max(1) as f64;
        let height = canvas.client_height().max(1) as f64;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let Some(context) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
        else {
            return;
        };

        let mut seed = 0x4b52_494e_4f4b_u64;
        let mut particles: Vec<Particle> = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: next_unit(&mut seed) * width,
                y: next_unit(&mut seed) * height,
                vx: (next_unit(&mut seed) - 0.5) * 0.6,
                vy: (next_unit(&mut seed) - 0.5) * 0.6,
                radius: 0.8 + next_unit(&mut seed) * 2.2,
                hue: 200.0 + next_unit(&mut seed) * 120.0,
            })
            .collect();

        let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let schedule = Rc::clone(&frame);

        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            // полупрозрачная заливка вместо очистки даёт шлейф за частицами
            context.set_fill_style_str("rgba(8, 8, 12, 0.28)");
            context.fill_rect(0.0, 0.0, width, height);

            for particle in particles.iter_mut() {
                particle.x += particle.vx;
                particle.y += particle.vy;
                if particle.x < 0.0 {
                    particle.x += width;
                } else if particle.x > width {
                    particle.x -= width;
                }
                if particle.y < 0.0 {
                    particle.y += height;
                } else if particle.y > height {
                    particle.y -= height;
                }

                context.begin_path();
                let _ = context.arc(
                    particle.x,
                    particle.y,
                    particle.radius,
                    0.0,
                    std::f64::consts::TAU,
                );
                context.set_fill_style_str(&format!("hsla({:.0}, 60%, 65%, 0.5)", particle.hue));
                context.fill();
            }

            if let (Some(window), Some(callback)) = (web_sys::window(), schedule.borrow().as_ref())
            {
                let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
            }
        }) as Box<dyn FnMut()>));

        if let (Some(window), Some(callback)) = (web_sys::window(), frame.borrow().as_ref()) {
            let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
        };
    });

    view! { <canvas node_ref=canvas_ref class="hero-scene" aria-hidden="true"></canvas> }
}
