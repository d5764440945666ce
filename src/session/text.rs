//! Static copy shown by the front ends.

pub const TITLE: &str = "You Are the Neural Network";

pub const INTRO: &str = "You will act as a neural network and decide whether the image \
contains a cat. The system may sometimes be wrong; this is intentional and realistic.";

pub const HOW_TO_PLAY: [&str; 4] = [
    "Choose an image",
    "Observe the features",
    "Adjust importance",
    "See the prediction",
];

pub const IMAGE_PROMPT: &str = "Which image do you want to analyse?";

pub const FEATURES_HINT: &str =
    "The neural network does not understand images like humans. It only works with features.";

pub const WEIGHTS_HINT: &str = "Higher value = more influence on decision";

pub const PREDICTION_CAT: &str = "Prediction: It is a cat!";

pub const PREDICTION_NOT_CAT: &str = "Prediction: It is NOT a cat";

pub const CONFIDENTLY_WRONG: &str = "The system predicted cat even though the image is not a cat. \
This shows how AI can be confident but wrong when features overlap.";

pub const EXPLANATION_TITLE: &str = "What is happening here?";

pub const EXPLANATION: [&str; 6] = [
    "The image is input data",
    "Selected features are inputs",
    "Importance values are weights",
    "The score is a combination of inputs",
    "The threshold acts like an activation",
    "Learning happens by adjusting weights",
];

pub const SIMULATION_NOTE: &str = "This is a simulation to help you understand neural networks. \
It is not a real image recognition system.";
