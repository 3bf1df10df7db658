use crate::peripherals::Buzzer;
use crate::settings::SoundSettings;

pub const NOTE_E4: u32 = 330;
pub const NOTE_F4: u32 = 349;
pub const NOTE_G4: u32 = 392;
pub const NOTE_A4: u32 = 440;
pub const NOTE_C5: u32 = 523;
pub const NOTE_D5: u32 = 587;
pub const NOTE_G5: u32 = 784;
pub const NOTE_C6: u32 = 1047;

/// `(frequency_hz, duration_ms)` pairs played back to back.
pub type Melody = &'static [(u32, u32)];

pub const BITE: Melody = &[(NOTE_G4, 50)];

pub const GAME_WON: Melody = &[
    (NOTE_C5, 300),
    (NOTE_D5, 300),
    (NOTE_G5, 300),
    (NOTE_C6, 600),
    (NOTE_D5, 300),
    (NOTE_C5, 600),
];

pub const GAME_OVER: Melody = &[
    (NOTE_A4, 300),
    (NOTE_G4, 300),
    (NOTE_F4, 400),
    (NOTE_E4, 600),
];

pub fn play_melody<B: Buzzer + ?Sized>(buzzer: &mut B, melody: Melody) {
    for &(frequency, duration) in melody {
        buzzer.play_tone(frequency, duration);
    }
}

/// Short cue, silenced by the effects mute flag.
pub fn play_effect<B: Buzzer + ?Sized>(buzzer: &mut B, sound: &SoundSettings, melody: Melody) {
    if !sound.effects.mute {
        play_melody(buzzer, melody);
    }
}

/// Jingle, silenced by the music mute flag.
pub fn play_music<B: Buzzer + ?Sized>(buzzer: &mut B, sound: &SoundSettings, melody: Melody) {
    if !sound.music.mute {
        play_melody(buzzer, melody);
    }
}
