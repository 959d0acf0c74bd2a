mod tests {
    use rgbw_remote_strip::color::{PALETTE_3, SCATTER_HUES, blend_colors, hue_wheel};
    use rgbw_remote_strip::effect::{
        CycleEffect, CycleStyle, Effect, SCATTER_SPACING, STEP_SHIFT, ScatterEffect, WIPE_SEGMENT,
    };
    use rgbw_remote_strip::{
        DEFAULT_LIGHT_CONFIG, Mode, RenderState, Renderer, Rgbw, SharedRenderState,
    };

    const N: usize = 8;

    fn solid(color: Rgbw) -> RenderState {
        let mut state = RenderState::default();
        state.color = color;
        state
    }

    #[test]
    fn test_solid_is_uniform() {
        let mut renderer = Renderer::<N>::new();
        let frame = renderer.render(&solid(Rgbw::BLUE));
        assert_eq!(frame, [Rgbw::BLUE; N]);
    }

    #[test]
    fn test_power_off_renders_black() {
        let mut renderer = Renderer::<N>::new();
        let mut state = solid(Rgbw::RED);
        state.running = false;
        assert_eq!(renderer.render(&state), [Rgbw::BLACK; N]);
        assert_eq!(renderer.phase(), 0);
    }

    #[test]
    fn test_transition_starts_at_previous_color() {
        let mut renderer = Renderer::<N>::new();
        let mut state = solid(Rgbw::BLUE);
        state.select(Mode::Solid, Rgbw::RED);
        assert_eq!(renderer.render(&state), [Rgbw::BLUE; N]);

        state.countdown = 128;
        let expected = blend_colors(Rgbw::RED, Rgbw::BLUE, 128);
        assert_eq!(renderer.render(&state), [expected; N]);

        state.countdown = 0;
        assert_eq!(renderer.render(&state), [Rgbw::RED; N]);
    }

    #[test]
    fn test_transition_runs_out_after_51_frames() {
        let shared = SharedRenderState::new(&DEFAULT_LIGHT_CONFIG);
        shared.update(|state| state.select(Mode::Flash, Rgbw::GREEN));
        assert_eq!(shared.snapshot().countdown, 255);
        assert_eq!(shared.snapshot().previous_mode, Mode::Solid);

        for frame in 0..51u8 {
            let state = shared.take_frame(5);
            assert_eq!(state.countdown, 255 - 5 * frame);
        }
        assert_eq!(shared.snapshot().countdown, 0);
        assert_eq!(shared.take_frame(5).countdown, 0);
    }

    #[test]
    fn test_pause_freezes_phase() {
        let mut renderer = Renderer::<N>::new();
        let mut state = solid(Rgbw::RED);
        state.speed = 10;
        renderer.render(&state);
        renderer.render(&state);
        assert_eq!(renderer.phase(), 20);

        state.paused = true;
        renderer.render(&state);
        assert_eq!(renderer.phase(), 20);
    }

    #[test]
    fn test_jump_steps_through_palette() {
        let effect = CycleEffect::new(&PALETTE_3, CycleStyle::Jump);
        let step = 1 << STEP_SHIFT;
        assert_eq!(effect.color_at(0), Rgbw::RED);
        assert_eq!(effect.color_at(step), Rgbw::GREEN);
        assert_eq!(effect.color_at(2 * step), Rgbw::BLUE);
        assert_eq!(effect.color_at(3 * step), Rgbw::RED);
    }

    #[test]
    fn test_fade_blends_toward_next_entry() {
        let effect = CycleEffect::new(&PALETTE_3, CycleStyle::Fade);
        let half = 1 << (STEP_SHIFT - 1);
        assert_eq!(effect.color_at(0), Rgbw::RED);
        assert_eq!(
            effect.color_at(half),
            blend_colors(Rgbw::RED, Rgbw::GREEN, 128)
        );
    }

    #[test]
    fn test_flash_alternates() {
        let mut renderer = Renderer::<N>::new();
        let mut state = solid(Rgbw::WHITE);
        state.mode = Mode::Flash;
        state.speed = 255;

        let mut lit = 0;
        let mut dark = 0;
        for _ in 0..16 {
            match renderer.render(&state)[0] {
                Rgbw::WHITE => lit += 1,
                Rgbw::BLACK => dark += 1,
                other => panic!("unexpected {other:?}"),
            }
        }
        assert!(lit > 0 && dark > 0);
    }

    #[test]
    fn test_auto_varies_per_pixel() {
        let mut renderer = Renderer::<N>::new();
        let mut state = RenderState::default();
        state.mode = Mode::Auto;
        let frame = renderer.render(&state);

        assert_ne!(frame[0], frame[N / 2]);
        assert!(frame.iter().all(|pixel| pixel.w == 0));
    }

    fn dark_pixels(frame: &[Rgbw]) -> Vec<usize> {
        (0..frame.len()).filter(|&index| frame[index] == Rgbw::BLACK).collect()
    }

    #[test]
    fn test_power_off_wipes_out() {
        const LONG: usize = 2 * WIPE_SEGMENT;
        let mut renderer = Renderer::<LONG>::new();
        let mut state = solid(Rgbw::WARM_WHITE);
        state.toggle_running();
        assert!(!state.running);
        assert!(state.is_wiping());

        assert_eq!(renderer.render(&state), [Rgbw::WARM_WHITE; LONG]);

        // 127 of 255 swept: the first 7 pixels of each segment are dark
        state.countdown = 128;
        let frame = renderer.render(&state);
        let expected: Vec<usize> = (0..7).chain(WIPE_SEGMENT..WIPE_SEGMENT + 7).collect();
        assert_eq!(dark_pixels(frame), expected);
        assert!(frame.iter().all(|&pixel| pixel == Rgbw::BLACK || pixel == Rgbw::WARM_WHITE));

        state.countdown = 0;
        assert_eq!(renderer.render(&state), [Rgbw::BLACK; LONG]);
        assert_eq!(renderer.phase(), 0);
    }

    #[test]
    fn test_power_on_wipes_in() {
        const LONG: usize = 2 * WIPE_SEGMENT;
        let mut renderer = Renderer::<LONG>::new();
        let mut state = solid(Rgbw::WARM_WHITE);
        state.running = false;
        state.toggle_running();
        assert!(state.running);

        assert_eq!(renderer.render(&state), [Rgbw::BLACK; LONG]);

        state.countdown = 128;
        let expected: Vec<usize> = (7..WIPE_SEGMENT).chain(WIPE_SEGMENT + 7..LONG).collect();
        assert_eq!(dark_pixels(renderer.render(&state)), expected);

        state.countdown = 0;
        assert_eq!(renderer.render(&state), [Rgbw::WARM_WHITE; LONG]);
    }

    #[test]
    fn test_power_toggle_mid_wipe_reverses() {
        let mut state = RenderState::default();
        state.toggle_running();
        state.countdown = 200;
        state.toggle_running();

        assert!(state.running);
        assert!(state.is_wiping());
        assert_eq!(state.countdown, 55);
    }

    #[test]
    fn test_selection_ends_wipe() {
        let mut renderer = Renderer::<N>::new();
        let mut state = solid(Rgbw::BLUE);
        state.toggle_running();
        state.select_color(Rgbw::RED);

        assert!(!state.is_wiping());
        assert_eq!(renderer.render(&state), [Rgbw::BLACK; N]);
    }

    #[test]
    fn test_hue_wheel_segments() {
        assert_eq!(hue_wheel(0), Rgbw::RED);
        assert_eq!(hue_wheel(84), Rgbw::new(3, 0, 252, 0));
        assert_eq!(hue_wheel(85), Rgbw::BLUE);
        assert_eq!(hue_wheel(170), Rgbw::GREEN);
        assert_eq!(hue_wheel(255), Rgbw::RED);
        for hue in 0..=255u8 {
            let color = hue_wheel(hue);
            assert_eq!(color.w, 0);
            assert!([color.r, color.g, color.b].contains(&0));
        }
    }

    #[test]
    fn test_scatter_lights_every_third_pixel() {
        const LONG: usize = 30;
        let mut renderer = Renderer::<LONG>::new();
        let mut state = RenderState::default();
        state.select_mode(Mode::Scatter);
        state.countdown = 0;
        let frame = renderer.render(&state);

        let dots: Vec<Rgbw> = frame.iter().copied().step_by(SCATTER_SPACING).collect();
        assert_eq!(dots.len(), LONG / SCATTER_SPACING);
        assert_eq!(dark_pixels(frame).len(), LONG - dots.len());

        let palette: Vec<Rgbw> = SCATTER_HUES.iter().map(|&hue| hue_wheel(hue)).collect();
        assert!(dots.iter().all(|dot| palette.contains(dot)));
        assert!(dots.windows(2).all(|pair| pair[0] != pair[1]));
        assert_ne!(dots[0], hue_wheel(0));
    }

    #[test]
    fn test_scatter_holds_still_until_reseeded() {
        let effect = ScatterEffect::new(7);
        let mut first = [Rgbw::BLACK; 30];
        let mut later = [Rgbw::BLACK; 30];
        effect.render(0, &mut first);
        effect.render(123_456, &mut later);
        assert_eq!(first, later);

        let patterns: Vec<[Rgbw; 30]> = (0..8)
            .map(|seed| {
                let mut leds = [Rgbw::BLACK; 30];
                ScatterEffect::new(seed).render(0, &mut leds);
                leds
            })
            .collect();
        assert!(patterns.iter().any(|pattern| *pattern != patterns[0]));
    }

    #[test]
    fn test_selection_bumps_seed() {
        let mut state = RenderState::default();
        let seed = state.seed;
        state.select_mode(Mode::Scatter);
        state.select_mode(Mode::Scatter);
        assert_eq!(state.seed, seed.wrapping_add(2));
    }
}
