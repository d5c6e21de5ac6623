/// Sound ids the scenes cue. The mixer behind them is deliberately narrow:
/// in a terminal build it only tracks what would have played, but call sites
/// stay honest so a real backend can slot in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sfx {
    Hit,
    Death,
    Pickup,
    Blip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Song {
    Menu,
    Level,
    Losing,
}

pub struct Mixer {
    sfx_volume: f32,
    last_sfx: Option<Sfx>,
    current_song: Option<Song>,
}

impl Mixer {
    pub fn new(sfx_volume: f32) -> Self {
        Self {
            sfx_volume,
            last_sfx: None,
            current_song: None,
        }
    }

    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.sfx_volume = volume.clamp(0.0, 1.0);
    }

    pub fn play(&mut self, sfx: Sfx) {
        if self.sfx_volume > 0.0 {
            self.last_sfx = Some(sfx);
        }
    }

    pub fn play_song(&mut self, song: Song) {
        self.current_song = Some(song);
    }

    pub fn stop_music(&mut self) {
        self.current_song = None;
    }

    #[cfg(test)]
    pub fn last_sfx(&self) -> Option<Sfx> {
        self.last_sfx
    }

    #[cfg(test)]
    pub fn current_song(&self) -> Option<Song> {
        self.current_song
    }
}
