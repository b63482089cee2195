//! # Shared Constants
//!
//! Names and limits that give meaning to parts of the delta log.

/// Class names with special treatment
pub mod class {
    /// Player-driven car
    pub const CAR: &str = "TAGame.Car_TA";

    pub const BALL: &str = "TAGame.Ball_TA";

    /// Sentinel returned when a class id is missing from the class index
    pub const UNKNOWN: &str = "class not found";
}

/// Property names with special treatment
pub mod property {
    /// Position / rotation / velocity bundle
    pub const RIGID_BODY_STATE: &str = "TAGame.RBActor_TA:ReplicatedRBState";

    pub const PLAYER_NAME: &str = "Engine.PlayerReplicationInfo:PlayerName";

    pub const TEAM_PAINT: &str = "TAGame.Car_TA:TeamPaint";
}

/// Default engine limits and scales
pub mod limits {
    /// Distinct property names kept per entity
    pub const PROPERTY_LOG_CAP: usize = 50;

    /// Display names must stay strictly below this many characters
    pub const DISPLAY_NAME_CAP: usize = 128;

    /// Raw positions are in the thousands
    pub const DEFAULT_POS_SCALE: f32 = 0.01;

    /// Raw rotations are roughly in -1..1
    pub const DEFAULT_ROT_SCALE: f32 = 180.0;
}

/// Default team paint
pub mod colors {
    use crate::types::LinearColor;

    /// Orange, used for team number 0
    pub const TEAM0: LinearColor = LinearColor::rgb(1.0, 0.5, 0.0);

    /// Blue, used for every other team number
    pub const TEAM1: LinearColor = LinearColor::rgb(0.0, 0.0, 1.0);
}
