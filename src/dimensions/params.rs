/// Physical inputs of a pitch, in meters (angles in degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalParams {
    /// Distance between the side lines.
    pub pitch_width: f64,
    /// Distance between the back lines.
    pub pitch_length: f64,
    /// Distance from a back line to the post.
    pub post_distance: f64,
    /// Gap between the post and the korf ring.
    pub korf_offset: f64,
    pub korf_width: f64,
    pub korf_length: f64,
    /// The 2.5 m restricted-zone distance across the pitch.
    pub twofifty_width: f64,
    /// The 2.5 m restricted-zone distance along the pitch.
    pub twofifty_length: f64,
    /// Half-angle of the arc drawn behind each post. `None` draws no arc.
    pub arc: Option<f64>,
    /// Whether y grows downwards (top has the smaller y).
    pub invert_y: bool,
}
