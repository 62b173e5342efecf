use space_survivor::compute::{init_state, new_monster, tick};
use space_survivor::config::*;
use space_survivor::entities::InputState;

use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn defaults_match_stock_game() {
    let c = GameConfig::default();
    assert_eq!((c.window_width, c.window_height), (1280, 720));
    assert_eq!(c.player_speed, 300.0);
    assert_eq!(c.monster_speed, 100.0);
    assert_eq!(c.player_max_health, 100);
    assert_eq!(c.monster_damage, 1);
    assert_eq!(c.monster_attack_damage, 10);
    assert_eq!(c.monster_attack_cooldown, 1000.0);
    assert_eq!(c.monster_push_force, 50.0);
    assert_eq!(c.spawn_interval, 1.0);
    assert_eq!(c.weapon_fire_interval, 0.5);
    assert_eq!(c.bullet_speed, 500.0);
    assert_eq!(c.kill_score, 10);
    assert_eq!(c.weapon_max_burst, 64);
    assert!(c.validate().is_ok());
}

#[test]
fn partial_toml_overrides_only_named_keys() {
    let text = r#"
        window_width = 800
        spawn_interval = 2.0

        [player_sprite]
        width = 40
        height = 30
    "#;
    let c = GameConfig::from_toml_str(text).expect("valid config");
    assert_eq!(c.window_width, 800);
    assert_eq!(c.window_height, 720);
    assert_eq!(c.spawn_interval, 2.0);
    assert_eq!(c.player_sprite, SpriteSize::new(40, 30));
    assert_eq!(c.monster_sprite, GameConfig::default().monster_sprite);
}

#[test]
fn empty_toml_is_default() {
    let c = GameConfig::from_toml_str("").expect("valid config");
    assert_eq!(c, GameConfig::default());
}

#[test]
fn zero_fire_interval_is_rejected() {
    let err = GameConfig::from_toml_str("weapon_fire_interval = 0.0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn tiny_fire_interval_is_rejected() {
    let err = GameConfig::from_toml_str("weapon_fire_interval = 1e-10").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn non_finite_fire_interval_is_rejected() {
    let mut c = GameConfig::default();
    c.weapon_fire_interval = f32::INFINITY;
    assert!(matches!(c.validate(), Err(ConfigError::Invalid(_))));
    c.weapon_fire_interval = f32::NAN;
    assert!(matches!(c.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn shortest_fire_interval_is_accepted() {
    let c = GameConfig::from_toml_str("weapon_fire_interval = 0.001").expect("valid config");
    assert_eq!(c.weapon_fire_interval, MIN_FIRE_INTERVAL);
}

#[test]
fn zero_burst_is_rejected() {
    let err = GameConfig::from_toml_str("weapon_max_burst = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn oversized_window_is_rejected() {
    let err = GameConfig::from_toml_str("window_width = 4000000000").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = GameConfig::from_toml_str("window_height = 1048577").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let c = GameConfig::from_toml_str("window_width = 1048576").expect("valid config");
    assert_eq!(c.window_width, MAX_WINDOW_EXTENT);
}

#[test]
fn zero_sized_sprite_is_rejected() {
    let err = GameConfig::from_toml_str("[bullet_sprite]\nwidth = 0\nheight = 10").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn wrong_type_is_a_parse_error() {
    let err = GameConfig::from_toml_str("window_width = \"wide\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = GameConfig::load("/definitely/not/here/space_survivor.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn half_width_rounds_down() {
    assert_eq!(SpriteSize::new(99, 75).half_width(), 49.0);
    assert_eq!(SpriteSize::new(100, 1).half_width(), 50.0);
}

#[test]
fn push_force_does_not_change_the_simulation() {
    let mut pushy = GameConfig::default();
    pushy.monster_push_force = 5000.0;

    let mut a = init_state(GameConfig::default());
    let mut b = init_state(pushy);
    for world in [&mut a, &mut b] {
        let (x, y) = (world.player.body.x, world.player.body.y);
        let monster = new_monster(x + 20.0, y, &world.config);
        world.monsters.push(monster);
    }

    let mut rng_a = StdRng::seed_from_u64(7);
    let mut rng_b = StdRng::seed_from_u64(7);
    let input = InputState { right: true, ..InputState::default() };
    for _ in 0..120 {
        tick(&mut a, 1.0 / 60.0, input, &mut rng_a);
        tick(&mut b, 1.0 / 60.0, input, &mut rng_b);
    }

    assert_eq!(a.player, b.player);
    assert_eq!(a.monsters, b.monsters);
    assert_eq!(a.bullets, b.bullets);
    assert_eq!(a.score, b.score);
}
