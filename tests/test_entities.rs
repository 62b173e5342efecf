use space_survivor::compute::{init_state, new_bullet, new_monster, new_player};
use space_survivor::config::{GameConfig, SpriteSize};
use space_survivor::entities::*;
use space_survivor::geometry::{Aabb, Collidable, Positioned};

#[test]
fn entity_clone_and_eq() {
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_ne!(SpriteKind::Monster, SpriteKind::Bullet);

    let input = InputState { left: true, ..InputState::default() };
    let copy = input;
    assert_eq!(input, copy);
    assert_ne!(input, InputState::default());
}

#[test]
fn body_takes_sprite_size() {
    let body = Body::new(10.0, 20.0, 45.0, SpriteSize::new(8, 6));
    assert_eq!(body.bounds(), Aabb::new(10.0, 20.0, 8.0, 6.0));
    assert_eq!(body.position(), (10.0, 20.0));
    assert_eq!(Positioned::rotation(&body), 45.0);
    assert!(!body.is_dead());
}

#[test]
fn entities_share_collision_through_their_body() {
    let config = GameConfig::default();
    let player = new_player(&config);
    let on_top = new_monster(player.body.x + 10.0, player.body.y + 10.0, &config);
    let far = new_monster(-500.0, -500.0, &config);

    assert!(player.collides_with(&on_top));
    assert!(on_top.collides_with(&player));
    assert!(!player.collides_with(&far));

    let bullet = new_bullet(player.body.x, player.body.y, 90.0, &config);
    assert_eq!(bullet.rotation(), 90.0);
    assert!(bullet.collides_with(&player));
}

#[test]
fn dead_flag_is_visible_through_trait() {
    let config = GameConfig::default();
    let mut monster = new_monster(0.0, 0.0, &config);
    assert!(!monster.is_dead());
    monster.body.dead = true;
    assert!(monster.is_dead());
}

#[test]
fn world_clone_is_independent() {
    let original = init_state(GameConfig::default());
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.body.x = 99.0;
    cloned.score = 999;
    cloned
        .monsters
        .push(new_monster(5.0, 5.0, &cloned.config));

    assert_eq!(original.player.body.x, 640.0);
    assert_eq!(original.score, 0);
    assert!(original.monsters.is_empty());
}
