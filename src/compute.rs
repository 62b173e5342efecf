/// Game logic.
///
/// Every function works on the plain data in `entities`. The only side
/// effects are mutations of the values passed in and the injected RNG, so a
/// seeded RNG makes a whole session reproducible.

use log::{debug, info, trace, warn};
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{
    Body, Bullet, GameStatus, InputState, Monster, Player, RenderFeed, Sprite, SpriteKind,
    Weapon, World,
};
use crate::geometry::{Aabb, Collidable};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh session: the player centred, full health, one weapon, no
/// monsters yet.
pub fn init_state(config: GameConfig) -> World {
    let player = new_player(&config);
    info!(
        "new session: {}x{} window, player at ({}, {})",
        config.window_width, config.window_height, player.body.x, player.body.y
    );
    World {
        player,
        monsters: Vec::new(),
        bullets: Vec::new(),
        score: 0,
        spawn_timer: 0.0,
        status: GameStatus::Playing,
        final_score: None,
        frame: 0,
        config,
    }
}

pub fn new_player(config: &GameConfig) -> Player {
    Player {
        body: Body::new(
            config.width() / 2.0,
            config.height() / 2.0,
            0.0,
            config.player_sprite,
        ),
        health: config.player_max_health,
        weapons: vec![Weapon { cooldown: 0.0 }],
        input: InputState::default(),
    }
}

pub fn new_monster(x: f32, y: f32, config: &GameConfig) -> Monster {
    Monster {
        body: Body::new(x, y, 0.0, config.monster_sprite),
        attack_cooldown: 0.0,
        attack_damage: config.monster_attack_damage,
    }
}

/// A bullet heading along `rotation`. 0° is up, so x takes the sine and y
/// the cosine.
pub fn new_bullet(x: f32, y: f32, rotation: f32, config: &GameConfig) -> Bullet {
    let rad = rotation.to_radians();
    Bullet {
        body: Body::new(x, y, rotation, config.bullet_sprite),
        dx: config.bullet_speed * rad.sin(),
        dy: config.bullet_speed * rad.cos(),
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Shared session state the player reads and writes during its update.
pub struct PlayerContext<'a> {
    pub monsters: &'a [Monster],
    pub bullets: &'a mut Vec<Bullet>,
    pub score: &'a mut u32,
    pub config: &'a GameConfig,
}

/// Move, clamp, take contact damage, score dead monsters, then run weapons.
pub fn update_player(
    player: &mut Player,
    dt: f32,
    input: InputState,
    ctx: &mut PlayerContext<'_>,
) {
    let config = ctx.config;
    player.input = input;

    // Axes are independent, so diagonals are faster by √2.
    let step = config.player_speed * dt;
    let mut dx = 0.0;
    let mut dy = 0.0;
    if input.left {
        dx -= step;
    }
    if input.right {
        dx += step;
    }
    if input.up {
        dy += step;
    }
    if input.down {
        dy -= step;
    }

    if dx != 0.0 || dy != 0.0 {
        player.body.rotation = 90.0 - dy.atan2(dx).to_degrees();
    }

    player.body.x += dx;
    player.body.y += dy;
    clamp_to_window(&mut player.body, config);

    for monster in ctx.monsters {
        if player.collides_with(monster) {
            player.health -= config.monster_damage;
            if player.health <= 0 {
                player.body.dead = true;
            }
        }
        // Dead monsters are still listed until the prune step of this frame.
        if monster.is_dead() {
            *ctx.score += config.kill_score;
        }
    }

    let body = &player.body;
    for weapon in player.weapons.iter_mut() {
        update_weapon(weapon, dt, body, ctx.bullets, config);
    }
}

/// Keep the player sprite inside the window. Both axes use the half
/// *width* as margin.
fn clamp_to_window(body: &mut Body, config: &GameConfig) {
    let margin = config.player_sprite.half_width();
    let max_x = config.width() - margin;
    let max_y = config.height() - margin;

    if body.x > max_x {
        body.x = max_x;
    }
    if body.y > max_y {
        body.y = max_y;
    }
    if body.x < margin {
        body.x = margin;
    }
    if body.y < margin {
        body.y = margin;
    }
}

// ── Monsters ─────────────────────────────────────────────────────────────────

/// Walk straight at the player and land an attack if the cooldown allows.
///
/// The attack only lowers health; the player's own update decides death.
pub fn update_monster(monster: &mut Monster, dt: f32, player: &mut Player, config: &GameConfig) {
    let dx = player.body.x - monster.body.x;
    let dy = player.body.y - monster.body.y;
    let angle = dy.atan2(dx);
    monster.body.x += angle.cos() * config.monster_speed * dt;
    monster.body.y += angle.sin() * config.monster_speed * dt;

    monster.attack_cooldown -= dt;

    if monster.collides_with(player) && monster.attack_cooldown <= 0.0 {
        player.health -= monster.attack_damage;
        monster.attack_cooldown = config.monster_attack_cooldown;
    }
}

/// Place a monster somewhere in the band one window-size around the
/// window, pushed out by its own size when it landed beyond an edge.
pub fn spawn_monster(config: &GameConfig, rng: &mut impl Rng) -> Monster {
    let w = i64::from(config.window_width);
    let h = i64::from(config.window_height);
    let sprite = config.monster_sprite;

    let mut x = rng.gen_range(-w..2 * w) as f32;
    let mut y = rng.gen_range(-h..2 * h) as f32;

    if x < 0.0 {
        x -= sprite.width as f32;
    }
    if x > config.width() {
        x += sprite.width as f32;
    }
    if y < 0.0 {
        y -= sprite.height as f32;
    }
    if y > config.height() {
        y += sprite.height as f32;
    }

    new_monster(x, y, config)
}

/// The region in which monsters can exist: the window grown by one window
/// extent and one monster sprite on every side, plus the sprite's own reach
/// past the far edges.
pub fn monster_arena(config: &GameConfig) -> Aabb {
    let mw = config.monster_sprite.width as f32;
    let mh = config.monster_sprite.height as f32;
    Aabb::new(
        -config.width() - mw,
        -config.height() - mh,
        3.0 * config.width() + 3.0 * mw,
        3.0 * config.height() + 3.0 * mh,
    )
}

// ── Weapons & bullets ────────────────────────────────────────────────────────

/// Count the cooldown down and fire once per elapsed interval, so a long
/// frame fires every shot it owes, up to `weapon_max_burst`. Past that the
/// backlog is dropped and the cooldown restarts. Returns the shots fired.
pub fn update_weapon(
    weapon: &mut Weapon,
    dt: f32,
    owner: &Body,
    bullets: &mut Vec<Bullet>,
    config: &GameConfig,
) -> usize {
    weapon.cooldown -= dt;
    if weapon.cooldown > 0.0 {
        return 0;
    }

    let interval = config.weapon_fire_interval;
    let max_burst = config.weapon_max_burst as usize;
    // Smallest n with cooldown + n * interval > 0.
    let owed = (-weapon.cooldown / interval).floor() + 1.0;

    let fired = if owed.is_finite() && owed <= max_burst as f32 {
        let shots = owed as usize;
        weapon.cooldown += shots as f32 * interval;
        shots
    } else {
        warn!(
            "weapon owed {} shots, firing {} and dropping the rest",
            owed, max_burst
        );
        weapon.cooldown = interval;
        max_burst
    };

    for _ in 0..fired {
        fire_weapon(owner, bullets, config);
    }
    fired
}

/// Spawn a bullet at the owner's position along the owner's heading.
pub fn fire_weapon(owner: &Body, bullets: &mut Vec<Bullet>, config: &GameConfig) {
    bullets.push(new_bullet(owner.x, owner.y, owner.rotation, config));
}

/// Move, then kill the first overlapping monster in list order. A bullet
/// that hits nothing and has left the monster arena dies too.
pub fn update_bullet(bullet: &mut Bullet, dt: f32, monsters: &mut [Monster], config: &GameConfig) {
    bullet.body.x += bullet.dx * dt;
    bullet.body.y += bullet.dy * dt;

    if let Some(monster) = monsters
        .iter_mut()
        .find(|monster| bullet.collides_with(&**monster))
    {
        monster.body.dead = true;
        bullet.body.dead = true;
        trace!("bullet hit monster at ({}, {})", monster.body.x, monster.body.y);
        return;
    }

    if !monster_arena(config).overlaps(&bullet.bounds()) {
        bullet.body.dead = true;
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the session by `dt` seconds.
///
/// Order: player (and its weapons), monsters, prune the dead, spawn, bullets,
/// game-over check. A session that is already over is left untouched.
pub fn tick(world: &mut World, dt: f32, input: InputState, rng: &mut impl Rng) {
    if world.status == GameStatus::GameOver {
        return;
    }

    // ── 1. Player ────────────────────────────────────────────────────────────
    let mut ctx = PlayerContext {
        monsters: &world.monsters,
        bullets: &mut world.bullets,
        score: &mut world.score,
        config: &world.config,
    };
    update_player(&mut world.player, dt, input, &mut ctx);

    // ── 2. Monsters ──────────────────────────────────────────────────────────
    for monster in world.monsters.iter_mut() {
        update_monster(monster, dt, &mut world.player, &world.config);
    }

    // ── 3. Prune ─────────────────────────────────────────────────────────────
    world.monsters.retain(|monster| !monster.is_dead());
    world.bullets.retain(|bullet| !bullet.is_dead());

    // ── 4. Spawn (leftover time is dropped) ──────────────────────────────────
    world.spawn_timer += dt;
    if world.spawn_timer >= world.config.spawn_interval {
        world.spawn_timer = 0.0;
        let monster = spawn_monster(&world.config, rng);
        debug!("spawned monster at ({}, {})", monster.body.x, monster.body.y);
        world.monsters.push(monster);
    }

    // ── 5. Bullets ───────────────────────────────────────────────────────────
    for bullet in world.bullets.iter_mut() {
        update_bullet(bullet, dt, &mut world.monsters, &world.config);
    }

    world.frame += 1;

    // ── 6. Game over ─────────────────────────────────────────────────────────
    if world.player.is_dead() {
        world.status = GameStatus::GameOver;
        world.final_score = Some(world.score);
        info!(
            "game over after {} frames, final score {}",
            world.frame, world.score
        );
    }
}

// ── Presentation ─────────────────────────────────────────────────────────────

/// Snapshot of what to draw: player first, then monsters and bullets in list
/// order, dead entities left out.
pub fn render_feed(world: &World) -> RenderFeed {
    let player = std::iter::once((SpriteKind::Player, &world.player.body));
    let monsters = world.monsters.iter().map(|m| (SpriteKind::Monster, &m.body));
    let bullets = world.bullets.iter().map(|b| (SpriteKind::Bullet, &b.body));

    let sprites = player
        .chain(monsters)
        .chain(bullets)
        .filter(|(_, body)| !body.dead)
        .map(|(kind, body)| Sprite {
            kind,
            x: body.x,
            y: body.y,
            rotation: body.rotation,
        })
        .collect();

    RenderFeed {
        sprites,
        score: world.score,
        health: world.player.health,
        game_over: world.status == GameStatus::GameOver,
        final_score: world.final_score,
    }
}
