/// Excerpt of Mary Shelley's *Frankenstein* used when no corpus is supplied.
pub const SAMPLE_CORPUS: &str = "I am by birth a Genevese, and my family is one of the most distinguished of that republic. \
My ancestors had been for many years counsellors and syndics, and my father had filled several public situations \
with honour and reputation. He was respected by all who knew him for his integrity and indefatigable attention \
to public business. He passed his younger days perpetually occupied by the affairs of his country; a variety \
of circumstances had prevented his marrying early, nor was it until the decline of life that he became a husband \
and the father of a family. The interval was spent in travelling. Nothing is so painful to the human mind as a great and sudden change! \
I was possessed by a maddening rage when I thought of him. The miserable monster whom I had created. \
Why did I not die? More miserable than man ever was before, why did I not sink into forgetfulness and rest?";
