use vek::Vec2;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ActorType {
    Player,
    Enemy,
    Projectile,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2<f32>);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec2<f32>);

/// Remaining lifetime in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeToLive(pub f32);
