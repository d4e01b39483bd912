use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use yew::prelude::*;

const COLORS: [&str; 5] = ["#6C63FF", "#4ECDC4", "#FF6B6B", "#F39C12", "#2ECC71"];
const PIECE_COUNT: usize = 50;
// Longest fall is 5s; clear the overlay shortly after the last piece lands.
const CLEANUP_MS: i32 = 5500;

#[derive(Clone, PartialEq)]
struct Piece {
    color: &'static str,
    left_vw: f64,
    duration_s: f64,
    round: bool,
}

fn scatter(seed: u64) -> Vec<Piece> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..PIECE_COUNT)
        .map(|_| Piece {
            color: COLORS[rng.gen_range(0..COLORS.len())],
            left_vw: rng.gen_range(0.0..100.0),
            duration_s: rng.gen_range(2.0..5.0),
            round: rng.gen_bool(0.5),
        })
        .collect()
}

fn scatter_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0x5EED
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active: bool,
    /// Emitted once the pieces have fallen so the owner can drop the overlay.
    pub on_finished: Callback<()>,
}

#[function_component(Confetti)]
pub fn confetti(p: &Props) -> Html {
    let pieces = use_memo(p.active, |active| {
        if *active {
            scatter(scatter_seed())
        } else {
            Vec::new()
        }
    });

    {
        let on_finished = p.on_finished.clone();
        use_effect_with(p.active, move |active| {
            if *active {
                #[cfg(target_arch = "wasm32")]
                wasm_bindgen_futures::spawn_local(async move {
                    let _ = crate::dom::sleep_ms(CLEANUP_MS).await;
                    on_finished.emit(());
                });
                #[cfg(not(target_arch = "wasm32"))]
                {
                    let _ = &on_finished;
                }
            }
            || {}
        });
    }

    if !p.active {
        return Html::default();
    }

    let rendered = pieces.iter().map(|piece| {
        let style = format!(
            "position:fixed;width:10px;height:10px;background:{};left:{:.1}vw;top:-10px;border-radius:{};animation:confetti-fall {:.1}s linear forwards;z-index:9999;",
            piece.color,
            piece.left_vw,
            if piece.round { "50%" } else { "0" },
            piece.duration_s,
        );
        html! { <div class="confetti-piece" {style}></div> }
    });

    html! {
        <div class="confetti" aria-hidden="true">
            <style>
                { "@keyframes confetti-fall{to{transform:translateY(100vh) rotate(720deg);opacity:0;}}" }
            </style>
            { for rendered }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn scatter_is_deterministic_for_a_seed() {
        let first = scatter(42);
        let second = scatter(42);
        assert_eq!(first.len(), PIECE_COUNT);
        assert!(first == second);
    }

    #[test]
    fn scatter_stays_inside_the_viewport_and_timing_bounds() {
        for piece in scatter(7) {
            assert!((0.0..100.0).contains(&piece.left_vw));
            assert!((2.0..5.0).contains(&piece.duration_s));
            assert!(COLORS.contains(&piece.color));
        }
    }

    #[test]
    fn inactive_overlay_renders_nothing() {
        let props = Props {
            active: false,
            on_finished: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Confetti>::with_props(props).render());
        assert!(!html.contains("confetti-piece"));
    }

    #[test]
    fn active_overlay_rains_fifty_pieces() {
        let props = Props {
            active: true,
            on_finished: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Confetti>::with_props(props).render());
        assert_eq!(html.matches("confetti-piece").count(), PIECE_COUNT);
        assert!(html.contains("confetti-fall"));
    }
}
