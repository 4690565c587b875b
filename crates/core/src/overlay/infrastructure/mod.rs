pub mod opencv_painter;
