mod tests {
    use embassy_time::Instant;
    use ehmi_light_ring::welcome::{STEP_DELAY, SweepStatus, WelcomeSweep};
    use ehmi_light_ring::{
        Action, Actor, ActorEvent, ActorId, Communicator, CommunicatorError, EventQueue, LightRing,
        LightRingConfig, RingDriver, Rgb, Urgency, color,
    };

    /// In-memory strip recording staged writes and commits.
    struct TestRing {
        pixels: Vec<Option<Rgb>>,
        mutations: usize,
        commits: usize,
    }

    impl TestRing {
        fn new(count: usize) -> Self {
            Self {
                pixels: vec![None; count],
                mutations: 0,
                commits: 0,
            }
        }

        fn lit(&self) -> Vec<usize> {
            self.pixels
                .iter()
                .enumerate()
                .filter_map(|(index, color)| color.map(|_| index))
                .collect()
        }
    }

    impl RingDriver for &mut TestRing {
        type Frame = usize;

        fn pixel_count(&self) -> usize {
            self.pixels.len()
        }

        fn set_pixel(&mut self, index: usize, color: Rgb) {
            self.pixels[index] = Some(color);
            self.mutations += 1;
        }

        fn clear_pixel(&mut self, index: usize) {
            self.pixels[index] = None;
            self.mutations += 1;
        }

        fn clear_all(&mut self) {
            self.pixels.fill(None);
            self.mutations += 1;
        }

        fn commit(&mut self) -> usize {
            self.commits += 1;
            self.commits
        }
    }

    fn actor(id: &str, bearing: f32, action: Action) -> Actor {
        Actor::new(ActorId::try_from(id).unwrap(), bearing, action)
    }

    #[test]
    fn test_sees_lights_span_around_bearing() {
        let mut strip = TestRing::new(360);
        let mut ring = LightRing::<_, 8>::new(&mut strip, &LightRingConfig::default());

        let frame = ring
            .sees(&actor("ped-1", 90.0, Action::Seen), Instant::from_millis(0))
            .unwrap();
        assert_eq!(frame, 1);
        assert_eq!(ring.pixels_for("ped-1"), Some(&[88, 89, 90, 91, 92][..]));

        drop(ring);
        assert_eq!(strip.lit(), vec![88, 89, 90, 91, 92]);
        for index in 88..=92 {
            assert_eq!(strip.pixels[index], Some(color::WHITE));
        }
        assert_eq!(strip.commits, 1);
    }

    #[test]
    fn test_sees_replaces_previous_allocation() {
        let mut strip = TestRing::new(360);
        let mut ring = LightRing::<_, 8>::new(&mut strip, &LightRingConfig::default());

        ring.sees(&actor("ped-1", 90.0, Action::Moving), Instant::from_millis(0))
            .unwrap();
        ring.sees(&actor("ped-1", 180.0, Action::Moving), Instant::from_millis(10))
            .unwrap();
        assert_eq!(ring.pixels_for("ped-1"), Some(&[178, 179, 180, 181, 182][..]));

        drop(ring);
        assert_eq!(strip.lit(), vec![178, 179, 180, 181, 182]);
        for index in 178..=182 {
            assert_eq!(strip.pixels[index], Some(color::GREEN));
        }
        assert_eq!(strip.commits, 2);
    }

    #[test]
    fn test_sees_updates_in_one_commit() {
        let mut strip = TestRing::new(360);
        let mut ring = LightRing::<_, 8>::new(&mut strip, &LightRingConfig::default());

        // clear of the old span and write of the new one share a commit
        ring.sees(&actor("ped-1", 10.0, Action::Seen), Instant::from_millis(0))
            .unwrap();
        let frame = ring
            .sees(&actor("ped-1", 200.0, Action::Seen), Instant::from_millis(5))
            .unwrap();
        assert_eq!(frame, 2);
    }

    #[test]
    fn test_no_longer_sees_clears_exact_span() {
        let mut strip = TestRing::new(360);
        let mut ring = LightRing::<_, 8>::new(&mut strip, &LightRingConfig::default());

        ring.sees(&actor("ped-1", 90.0, Action::Seen), Instant::from_millis(0))
            .unwrap();
        let (found, frame) = ring.no_longer_sees("ped-1");
        assert!(found);
        assert_eq!(frame, 2);
        assert_eq!(ring.pixels_for("ped-1"), None);

        drop(ring);
        assert!(strip.lit().is_empty());
    }

    #[test]
    fn test_no_longer_sees_unknown_actor() {
        let mut strip = TestRing::new(360);
        let mut ring = LightRing::<_, 8>::new(&mut strip, &LightRingConfig::default());

        let (found, frame) = ring.no_longer_sees("ghost");
        assert!(!found);
        assert_eq!(frame, 1);

        drop(ring);
        // not found still commits, but never touches a pixel
        assert_eq!(strip.mutations, 0);
        assert_eq!(strip.commits, 1);
    }

    #[test]
    fn test_overlapping_spans_clear_last_writer_wins() {
        let mut strip = TestRing::new(360);
        let mut ring = LightRing::<_, 8>::new(&mut strip, &LightRingConfig::default());

        ring.sees(&actor("ped-1", 90.0, Action::Seen), Instant::from_millis(0))
            .unwrap();
        ring.sees(&actor("ped-2", 92.0, Action::Seen), Instant::from_millis(0))
            .unwrap();

        // documented limitation: shared pixels go dark with the removed actor
        ring.no_longer_sees("ped-2");
        assert_eq!(ring.pixels_for("ped-1"), Some(&[88, 89, 90, 91, 92][..]));

        drop(ring);
        assert_eq!(strip.lit(), vec![88, 89]);
    }

    #[test]
    fn test_clear_darkens_everything() {
        let mut strip = TestRing::new(360);
        let mut ring = LightRing::<_, 8>::new(&mut strip, &LightRingConfig::default());

        ring.sees(&actor("ped-1", 45.0, Action::Moving), Instant::from_millis(0))
            .unwrap();
        ring.sees(&actor("ped-2", 270.0, Action::Stopped), Instant::from_millis(0))
            .unwrap();
        ring.clear();
        assert_eq!(ring.allocations().count(), 0);

        drop(ring);
        assert!(strip.lit().is_empty());
        assert_eq!(strip.commits, 3);
    }

    #[test]
    fn test_actor_table_capacity() {
        let mut strip = TestRing::new(360);
        let mut ring = LightRing::<_, 2>::new(&mut strip, &LightRingConfig::default());

        ring.sees(&actor("ped-1", 10.0, Action::Seen), Instant::from_millis(0))
            .unwrap();
        ring.sees(&actor("ped-2", 100.0, Action::Seen), Instant::from_millis(0))
            .unwrap();
        assert_eq!(
            ring.sees(&actor("ped-3", 200.0, Action::Seen), Instant::from_millis(0)),
            Err(CommunicatorError::TooManyActors)
        );
        // a known actor can still update in place
        ring.sees(&actor("ped-1", 20.0, Action::Moving), Instant::from_millis(0))
            .unwrap();
    }

    #[test]
    fn test_span_budget_is_enforced() {
        let mut strip = TestRing::new(360);
        let config = LightRingConfig {
            pixels_per_actor: 31,
            ..LightRingConfig::default()
        };
        let mut ring = LightRing::<_, 8>::new(&mut strip, &config);

        assert_eq!(
            ring.sees(&actor("ped-1", 0.0, Action::Seen), Instant::from_millis(0)),
            Err(CommunicatorError::SpanTooWide)
        );

        drop(ring);
        assert_eq!(strip.mutations, 0);
        assert_eq!(strip.commits, 0);
    }

    #[test]
    fn test_urgent_actor_flashes_on_resight() {
        let mut strip = TestRing::new(360);
        let mut ring = LightRing::<_, 8>::new(&mut strip, &LightRingConfig::default());
        let urgent = actor("ped-1", 90.0, Action::Stopped).with_urgency(Urgency::Request);

        // off-window sighting renders the span dark
        ring.sees(&urgent, Instant::from_millis(0)).unwrap();
        assert_eq!(ring.pixels_for("ped-1"), Some(&[88, 89, 90, 91, 92][..]));

        // on-window sighting lights it in the action color
        ring.sees(&urgent, Instant::from_millis(1000)).unwrap();

        drop(ring);
        assert_eq!(strip.lit(), vec![88, 89, 90, 91, 92]);
        assert_eq!(strip.pixels[90], Some(color::RED));
    }

    #[test]
    fn test_process_events_in_arrival_order() {
        let queue: EventQueue<8> = EventQueue::new();
        queue
            .publish(ActorEvent::Seen(actor("ped-1", 90.0, Action::Seen)))
            .unwrap();
        queue
            .publish(ActorEvent::Seen(actor("ped-2", 270.0, Action::Moving)))
            .unwrap();
        queue
            .publish(ActorEvent::Lost(ActorId::try_from("ped-1").unwrap()))
            .unwrap();

        let mut strip = TestRing::new(360);
        let mut ring = LightRing::<_, 8>::new(&mut strip, &LightRingConfig::default());
        ring.process_events(&queue, Instant::from_millis(0));

        assert!(queue.is_empty());
        assert_eq!(ring.pixels_for("ped-1"), None);
        assert_eq!(ring.pixels_for("ped-2"), Some(&[268, 269, 270, 271, 272][..]));

        drop(ring);
        assert_eq!(strip.lit(), vec![268, 269, 270, 271, 272]);
    }

    #[test]
    fn test_process_events_clear_all() {
        let queue: EventQueue<4> = EventQueue::new();
        queue
            .publish(ActorEvent::Seen(actor("ped-1", 10.0, Action::Seen)))
            .unwrap();
        queue.publish(ActorEvent::ClearAll).unwrap();

        let mut strip = TestRing::new(360);
        let mut ring = LightRing::<_, 8>::new(&mut strip, &LightRingConfig::default());
        ring.process_events(&queue, Instant::from_millis(0));
        assert_eq!(ring.allocations().count(), 0);

        drop(ring);
        assert!(strip.lit().is_empty());
    }

    #[test]
    fn test_event_queue_reports_full() {
        let queue: EventQueue<1> = EventQueue::new();
        queue.publish(ActorEvent::ClearAll).unwrap();
        assert!(queue.publish(ActorEvent::ClearAll).is_err());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_welcome_sweep_full_revolution() {
        let mut strip = TestRing::new(360);
        let mut ring = LightRing::<_, 8>::new(&mut strip, &LightRingConfig::default());
        let mut sweep = WelcomeSweep::new();

        let mut now = Instant::from_millis(0);
        let mut steps = 0;
        loop {
            match sweep.tick(&mut ring, now).unwrap() {
                SweepStatus::Pending(delay) => {
                    steps += 1;
                    now += delay;
                }
                SweepStatus::Done => break,
            }
        }

        // one step per degree, the last one holding before the clear
        assert_eq!(steps, 360);
        assert_eq!(now, Instant::from_millis(359 * STEP_DELAY.as_millis() + 1000));
        assert_eq!(ring.allocations().count(), 0);

        drop(ring);
        assert!(strip.lit().is_empty());
    }
}
